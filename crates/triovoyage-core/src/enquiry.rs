//! Enquiry Form
//!
//! The four contact fields collected on the page and the rules for
//! submitting them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// A field of the enquiry form, named as in the form's `name` attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnquiryField {
    Name,
    Email,
    Phone,
    Message,
}

impl EnquiryField {
    pub const ALL: [EnquiryField; 4] = [
        EnquiryField::Name,
        EnquiryField::Email,
        EnquiryField::Phone,
        EnquiryField::Message,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EnquiryField::Name => "name",
            EnquiryField::Email => "email",
            EnquiryField::Phone => "phone",
            EnquiryField::Message => "message",
        }
    }

    /// Name and email must be filled before an enquiry is sent.
    pub fn is_required(&self) -> bool {
        matches!(self, EnquiryField::Name | EnquiryField::Email)
    }
}

impl fmt::Display for EnquiryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnquiryField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(EnquiryField::Name),
            "email" => Ok(EnquiryField::Email),
            "phone" => Ok(EnquiryField::Phone),
            "message" => Ok(EnquiryField::Message),
            other => Err(DomainError::InvalidField(other.to_string())),
        }
    }
}

/// Current contents of the enquiry form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnquiryForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl EnquiryForm {
    pub fn get(&self, field: EnquiryField) -> &str {
        match field {
            EnquiryField::Name => &self.name,
            EnquiryField::Email => &self.email,
            EnquiryField::Phone => &self.phone,
            EnquiryField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: EnquiryField, value: impl Into<String>) {
        let slot = match field {
            EnquiryField::Name => &mut self.name,
            EnquiryField::Email => &mut self.email,
            EnquiryField::Phone => &mut self.phone,
            EnquiryField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Set a field by its form name. Unknown names leave the form untouched.
    pub fn update(&mut self, field_name: &str, value: impl Into<String>) -> DomainResult<()> {
        let field = field_name.parse::<EnquiryField>()?;
        self.set(field, value);
        Ok(())
    }

    /// Check that the required fields are non-empty, as the form's `required`
    /// attribute does. The email format is left to the browser's
    /// `type="email"` check.
    pub fn validate(&self) -> DomainResult<()> {
        EnquiryField::ALL
            .iter()
            .filter(|field| field.is_required())
            .find(|field| self.get(**field).is_empty())
            .map_or(Ok(()), |field| Err(DomainError::ValidationFailed(*field)))
    }

    pub fn is_blank(&self) -> bool {
        EnquiryField::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_round_trip() {
        for field in EnquiryField::ALL {
            assert_eq!(field.as_str().parse::<EnquiryField>().unwrap(), field);
        }
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut form = EnquiryForm::default();
        let result = form.update("address", "Main St");
        assert!(matches!(result, Err(DomainError::InvalidField(name)) if name == "address"));
        assert!(form.is_blank());
    }

    #[test]
    fn test_update_sets_named_field() {
        let mut form = EnquiryForm::default();
        form.update("email", "a@b.com").unwrap();
        form.update("message", "Two adults, June").unwrap();
        assert_eq!(form.email, "a@b.com");
        assert_eq!(form.get(EnquiryField::Message), "Two adults, June");
        assert!(form.name.is_empty());
    }

    #[test]
    fn test_validate_requires_name_and_email() {
        let mut form = EnquiryForm::default();
        assert!(matches!(form.validate(), Err(DomainError::ValidationFailed(EnquiryField::Name))));
        form.set(EnquiryField::Name, "Asha");
        assert!(matches!(form.validate(), Err(DomainError::ValidationFailed(EnquiryField::Email))));
        form.set(EnquiryField::Email, "asha@example.com");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_optional_fields_may_stay_empty() {
        let form = EnquiryForm {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            ..Default::default()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_whitespace_name_is_accepted() {
        let form = EnquiryForm {
            name: "   ".to_string(),
            email: "asha@example.com".to_string(),
            ..Default::default()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_email_format_not_checked() {
        let form = EnquiryForm {
            name: "Asha".to_string(),
            email: "not-an-email".to_string(),
            ..Default::default()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_clear_resets_all_fields() {
        let mut form = EnquiryForm {
            name: "A".to_string(),
            email: "B".to_string(),
            phone: "C".to_string(),
            message: "D".to_string(),
        };
        form.clear();
        assert_eq!(form, EnquiryForm::default());
        assert!(form.is_blank());
    }
}
