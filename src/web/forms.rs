//! Form error plumbing between services and templates.

use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::AppError;

/// Messages shown next to form fields, plus an optional form-level message.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FormErrors {
    fields: BTreeMap<String, Vec<String>>,
    general: Option<String>,
}

impl FormErrors {
    /// Reads `details.fields` as produced by `From<ValidationErrors> for AppError`.
    pub fn from_details(details: &Value) -> Self {
        let fields = details
            .get("fields")
            .and_then(Value::as_object)
            .map(|fields| {
                fields
                    .iter()
                    .map(|(name, messages)| {
                        let messages = messages
                            .as_array()
                            .map(|list| {
                                list.iter()
                                    .filter_map(Value::as_str)
                                    .map(str::to_string)
                                    .collect()
                            })
                            .unwrap_or_default();
                        (name.clone(), messages)
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            fields,
            general: None,
        }
    }

    /// Form-level message not tied to one field.
    pub fn with_general(message: impl Into<String>) -> Self {
        Self {
            fields: BTreeMap::new(),
            general: Some(message.into()),
        }
    }

    /// First message for `name`, if any.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    pub fn general(&self) -> Option<&str> {
        self.general.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.general.is_none() && self.fields.values().all(Vec::is_empty)
    }
}

/// Splits a service error into "redisplay the form" or "fail the request".
///
/// # Errors
///
/// Returns the original error unless it is [`AppError::Validation`].
pub fn into_form_errors(err: AppError) -> Result<FormErrors, AppError> {
    match err {
        AppError::Validation { details, .. } => Ok(FormErrors::from_details(&details)),
        other => Err(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_details_first_message() {
        let details = json!({
            "fields": {
                "title": ["Club Title is needed", "second"],
                "content": []
            }
        });

        let errors = FormErrors::from_details(&details);

        assert_eq!(errors.field("title"), Some("Club Title is needed"));
        assert_eq!(errors.field("content"), None);
        assert_eq!(errors.field("photo_url"), None);
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_default_is_empty() {
        assert!(FormErrors::default().is_empty());
        assert!(FormErrors::from_details(&json!({})).is_empty());
    }

    #[test]
    fn test_general_message() {
        let errors = FormErrors::with_general("Username is already taken");
        assert_eq!(errors.general(), Some("Username is already taken"));
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_into_form_errors_passes_other_variants_through() {
        let validation = AppError::bad_request(
            "Validation failed",
            json!({ "fields": { "name": ["Event name is required"] } }),
        );
        let errors = into_form_errors(validation).unwrap();
        assert_eq!(errors.field("name"), Some("Event name is required"));

        let not_found = AppError::not_found("Club not found", json!({}));
        assert!(matches!(
            into_form_errors(not_found),
            Err(AppError::NotFound { .. })
        ));
    }
}
