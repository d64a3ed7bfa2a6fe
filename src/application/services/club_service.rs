//! Club management service.

use serde_json::json;
use std::sync::Arc;
use validator::Validate;

use crate::application::dto::ClubDto;
use crate::domain::repositories::ClubRepository;
use crate::error::AppError;

/// Service for the club directory.
///
/// Every mutating call validates its [`ClubDto`] before touching the store;
/// reads map entities to DTOs through [`From<Club>`](crate::domain::entities::Club).
pub struct ClubService<R: ClubRepository> {
    repository: Arc<R>,
}

impl<R: ClubRepository> ClubService<R> {
    /// Creates a new club service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists every club in store order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn find_all_clubs(&self) -> Result<Vec<ClubDto>, AppError> {
        let clubs = self.repository.find_all().await?;
        Ok(clubs.into_iter().map(ClubDto::from).collect())
    }

    /// Creates a club from a form submission.
    ///
    /// Any `id` in the submission is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a required field is empty.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn save_club(&self, club: ClubDto) -> Result<ClubDto, AppError> {
        club.validate()?;

        let created = self.repository.create(club.into_new_club()).await?;
        tracing::info!(club_id = created.id, title = %created.title, "Club created");

        Ok(created.into())
    }

    /// Retrieves a club by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the club does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn find_club_by_id(&self, club_id: i64) -> Result<ClubDto, AppError> {
        self.repository
            .find_by_id(club_id)
            .await?
            .map(ClubDto::from)
            .ok_or_else(|| AppError::not_found("Club not found", json!({ "id": club_id })))
    }

    /// Retrieves the first club with exactly this title.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no club has this title.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn find_club_by_title(&self, title: &str) -> Result<ClubDto, AppError> {
        self.repository
            .find_by_title(title)
            .await?
            .map(ClubDto::from)
            .ok_or_else(|| AppError::not_found("Club not found", json!({ "title": title })))
    }

    /// Overwrites title, photo and content of the club at `club_id`.
    ///
    /// The id comes from the path; an id in the body is ignored. The club's
    /// id and creation time never change.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a required field is empty.
    /// Returns [`AppError::NotFound`] if the club does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_club(&self, club_id: i64, club: ClubDto) -> Result<ClubDto, AppError> {
        club.validate()?;

        let updated = self.repository.update(club_id, club.into_changes()).await?;
        tracing::info!(club_id = updated.id, "Club updated");

        Ok(updated.into())
    }

    /// Deletes a club together with its events.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the club does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_club(&self, club_id: i64) -> Result<(), AppError> {
        self.repository.delete(club_id).await?;
        tracing::info!(club_id, "Club deleted");
        Ok(())
    }

    /// Case-insensitive substring search over club titles.
    ///
    /// A blank query matches every club.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn search_clubs(&self, query: &str) -> Result<Vec<ClubDto>, AppError> {
        let clubs = self.repository.search(query).await?;
        Ok(clubs.into_iter().map(ClubDto::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Club;
    use crate::domain::repositories::MockClubRepository;
    use chrono::Utc;

    fn create_test_club(id: i64, title: &str) -> Club {
        Club::new(
            id,
            title.to_string(),
            "https://img.example.com/club.png".to_string(),
            "About the club".to_string(),
            Utc::now(),
            Utc::now(),
        )
    }

    fn submission(title: &str) -> ClubDto {
        ClubDto {
            title: title.to_string(),
            photo_url: "https://img.example.com/club.png".to_string(),
            content: "About the club".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_find_all_clubs_maps_every_row() {
        let mut mock_repo = MockClubRepository::new();

        let clubs = vec![create_test_club(1, "Morning"), create_test_club(2, "Evening")];
        mock_repo
            .expect_find_all()
            .times(1)
            .returning(move || Ok(clubs.clone()));

        let service = ClubService::new(Arc::new(mock_repo));

        let result = service.find_all_clubs().await.unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].id, Some(1));
        assert_eq!(result[1].title, "Evening");
    }

    #[tokio::test]
    async fn test_save_club_success() {
        let mut mock_repo = MockClubRepository::new();

        mock_repo
            .expect_create()
            .withf(|new_club| {
                new_club.title == "Morning" && new_club.content == "About the club"
            })
            .times(1)
            .returning(|_| Ok(create_test_club(5, "Morning")));

        let service = ClubService::new(Arc::new(mock_repo));

        let mut dto = submission("Morning");
        dto.id = Some(999);

        let created = service.save_club(dto).await.unwrap();

        assert_eq!(created.id, Some(5));
        assert_eq!(created.title, "Morning");
    }

    #[tokio::test]
    async fn test_save_club_invalid_never_writes() {
        let mut mock_repo = MockClubRepository::new();
        mock_repo.expect_create().times(0);

        let service = ClubService::new(Arc::new(mock_repo));

        let result = service.save_club(submission("")).await;

        let err = result.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.details()["fields"]["title"][0], "Club Title is needed");
    }

    #[tokio::test]
    async fn test_find_club_by_id_success() {
        let mut mock_repo = MockClubRepository::new();

        let club = create_test_club(3, "Track");
        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 3)
            .times(2)
            .returning(move |_| Ok(Some(club.clone())));

        let service = ClubService::new(Arc::new(mock_repo));

        let first = service.find_club_by_id(3).await.unwrap();
        let second = service.find_club_by_id(3).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.title, "Track");
    }

    #[tokio::test]
    async fn test_find_club_by_id_not_found() {
        let mut mock_repo = MockClubRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = ClubService::new(Arc::new(mock_repo));

        let result = service.find_club_by_id(404).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_find_club_by_title_not_found() {
        let mut mock_repo = MockClubRepository::new();

        mock_repo
            .expect_find_by_title()
            .withf(|title| title == "Nobody")
            .times(1)
            .returning(|_| Ok(None));

        let service = ClubService::new(Arc::new(mock_repo));

        let result = service.find_club_by_title("Nobody").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_club_uses_path_id_and_all_fields() {
        let mut mock_repo = MockClubRepository::new();

        mock_repo
            .expect_update()
            .withf(|id, changes| {
                *id == 7
                    && changes.title == "Renamed"
                    && changes.photo_url == "https://img.example.com/club.png"
                    && changes.content == "About the club"
            })
            .times(1)
            .returning(|id, _| Ok(create_test_club(id, "Renamed")));

        let service = ClubService::new(Arc::new(mock_repo));

        let mut dto = submission("Renamed");
        dto.id = Some(1);

        let updated = service.update_club(7, dto).await.unwrap();

        assert_eq!(updated.id, Some(7));
        assert_eq!(updated.title, "Renamed");
    }

    #[tokio::test]
    async fn test_update_club_invalid_never_writes() {
        let mut mock_repo = MockClubRepository::new();
        mock_repo.expect_update().times(0);

        let service = ClubService::new(Arc::new(mock_repo));

        let mut dto = submission("Still here");
        dto.content = String::new();

        let result = service.update_club(7, dto).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_update_club_not_found() {
        let mut mock_repo = MockClubRepository::new();

        mock_repo
            .expect_update()
            .times(1)
            .returning(|id, _| Err(AppError::not_found("Club not found", json!({ "id": id }))));

        let service = ClubService::new(Arc::new(mock_repo));

        let result = service.update_club(9, submission("Ghost")).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_club_propagates_not_found() {
        let mut mock_repo = MockClubRepository::new();

        mock_repo
            .expect_delete()
            .withf(|id| *id == 12)
            .times(1)
            .returning(|id| Err(AppError::not_found("Club not found", json!({ "id": id }))));

        let service = ClubService::new(Arc::new(mock_repo));

        let result = service.delete_club(12).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_search_clubs_passes_query_through() {
        let mut mock_repo = MockClubRepository::new();

        let matches = vec![
            create_test_club(1, "Running Club"),
            create_test_club(2, "RUNNERS"),
        ];
        mock_repo
            .expect_search()
            .withf(|query| query == "run")
            .times(1)
            .returning(move |_| Ok(matches.clone()));

        let service = ClubService::new(Arc::new(mock_repo));

        let result = service.search_clubs("run").await.unwrap();

        let titles: Vec<&str> = result.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Running Club", "RUNNERS"]);
    }
}
