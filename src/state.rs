//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{ClubService, EventService, UserService};
use crate::infrastructure::persistence::{
    PgClubRepository, PgEventRepository, PgRoleRepository, PgUserRepository,
};

pub type PgClubService = ClubService<PgClubRepository>;
pub type PgEventService = EventService<PgEventRepository, PgClubRepository>;
pub type PgUserService = UserService<PgUserRepository, PgRoleRepository>;

/// Services wired to their PostgreSQL repositories.
///
/// Cloning is cheap: every field is an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub club_service: Arc<PgClubService>,
    pub event_service: Arc<PgEventService>,
    pub user_service: Arc<PgUserService>,
    pub db: Arc<PgPool>,
}

impl AppState {
    /// Builds every repository and service on top of one pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        let club_repository = Arc::new(PgClubRepository::new(pool.clone()));
        let event_repository = Arc::new(PgEventRepository::new(pool.clone()));
        let role_repository = Arc::new(PgRoleRepository::new(pool.clone()));
        let user_repository = Arc::new(PgUserRepository::new(pool.clone()));

        Self {
            club_service: Arc::new(ClubService::new(club_repository.clone())),
            event_service: Arc::new(EventService::new(event_repository, club_repository)),
            user_service: Arc::new(UserService::new(user_repository, role_repository)),
            db: pool,
        }
    }
}
