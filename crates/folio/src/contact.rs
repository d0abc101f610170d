use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use strum::{Display as StrumDisplay, EnumIter, EnumString};
use thiserror::Error;

pub const MIN_MESSAGE_CHARS: usize = 10;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ProjectType {
    #[default]
    WebDevelopment,
    Ecommerce,
    Dashboard,
    MobileApp,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub project: ProjectType,
    #[serde(default)]
    pub budget: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Company,
    Budget,
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("name is required")]
    NameRequired,
    #[error("email is required")]
    EmailRequired,
    #[error("please enter a valid email")]
    EmailInvalid,
    #[error("message is required")]
    MessageRequired,
    #[error("message must be at least {min} characters")]
    MessageTooShort { min: usize },
}

impl FieldError {
    pub fn field(&self) -> ContactField {
        match self {
            Self::NameRequired => ContactField::Name,
            Self::EmailRequired | Self::EmailInvalid => ContactField::Email,
            Self::MessageRequired | Self::MessageTooShort { .. } => ContactField::Message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", summarize(.0))]
pub struct ValidationErrors(Vec<FieldError>);

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field(), e))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn for_field(&self, field: ContactField) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field() == field)
    }
}

impl ContactRequest {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::NameRequired);
        }

        if self.email.trim().is_empty() {
            errors.push(FieldError::EmailRequired);
        } else if !EMAIL.is_match(&self.email) {
            errors.push(FieldError::EmailInvalid);
        }

        // length counts the raw message, only emptiness is checked after trimming
        if self.message.trim().is_empty() {
            errors.push(FieldError::MessageRequired);
        } else if self.message.chars().count() < MIN_MESSAGE_CHARS {
            errors.push(FieldError::MessageTooShort {
                min: MIN_MESSAGE_CHARS,
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ContactRequest {
        ContactRequest {
            name: "Sarah Johnson".into(),
            email: "sarah@techflow.io".into(),
            company: "TechFlow Solutions".into(),
            project: ProjectType::Ecommerce,
            budget: "10k-25k".into(),
            message: "We need a new storefront.".into(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_blank_fields_are_required() {
        let blank = ContactRequest {
            name: "   ".into(),
            email: "".into(),
            message: "\n".into(),
            ..request()
        };
        let errors = blank.validate().unwrap_err();
        assert_eq!(
            errors.errors(),
            &[
                FieldError::NameRequired,
                FieldError::EmailRequired,
                FieldError::MessageRequired
            ]
        );
    }

    #[test]
    fn test_email_shape() {
        for bad in ["sarah", "sarah@techflow", "sa rah@techflow.io", "a@b@c.io", "@x.io"] {
            let errors = ContactRequest {
                email: bad.into(),
                ..request()
            }
            .validate()
            .unwrap_err();
            assert_eq!(
                errors.for_field(ContactField::Email),
                Some(&FieldError::EmailInvalid),
                "{bad}"
            );
        }
        for good in ["a@b.co", "first.last@sub.domain.org"] {
            let ok = ContactRequest {
                email: good.into(),
                ..request()
            };
            assert!(ok.validate().is_ok(), "{good}");
        }
    }

    #[test]
    fn test_message_minimum_length() {
        let short = ContactRequest {
            message: "Too short".into(),
            ..request()
        };
        let errors = short.validate().unwrap_err();
        assert_eq!(
            errors.to_string(),
            "message: message must be at least 10 characters"
        );

        let exact = ContactRequest {
            message: "Ten chars!".into(),
            ..request()
        };
        assert!(exact.validate().is_ok());
    }

    #[test]
    fn test_project_type_names() {
        assert_eq!(ProjectType::MobileApp.to_string(), "mobile-app");
        let parsed: ProjectType = serde_json::from_str("\"web-development\"").unwrap();
        assert_eq!(parsed, ProjectType::WebDevelopment);
        assert_eq!(ContactRequest::default().project, ProjectType::WebDevelopment);
    }

    #[test]
    fn test_errors_join_into_one_message() {
        let errors = ContactRequest {
            name: String::new(),
            email: "nope".into(),
            ..request()
        }
        .validate()
        .unwrap_err();

        let boxed: Box<dyn std::error::Error> = Box::new(errors);
        assert_eq!(
            boxed.to_string(),
            "name: name is required; email: please enter a valid email"
        );
    }

    #[test]
    fn test_company_and_budget_are_optional() {
        let bare = ContactRequest {
            company: String::new(),
            budget: String::new(),
            ..request()
        };
        let result = bare.validate();
        assert!(result.is_ok());
        assert_eq!(ContactField::Budget.to_string(), "budget");
    }
}
