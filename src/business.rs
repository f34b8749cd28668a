use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Facts about the new business supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessInput {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub email: Option<String>,
    pub doctor: Option<String>,
    pub tagline: Option<String>,
    pub reference_url: Option<String>,
}

impl BusinessInput {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        BusinessInput {
            name: name.into(),
            phone: phone.into(),
            address: address.into(),
            ..Default::default()
        }
    }

    /// Checks required fields in `name`, `phone`, `address` order and
    /// reports the first one that is blank.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("name", &self.name),
            ("phone", &self.phone),
            ("address", &self.address),
        ] {
            if value.trim().is_empty() {
                return Err(Error::Validation { field });
            }
        }
        Ok(())
    }

    /// Optional fields count as absent when blank.
    pub(crate) fn optional(value: &Option<String>) -> Option<&str> {
        value.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_first_missing_field() {
        let err = BusinessInput::new("", "x", "y").validate().unwrap_err();
        assert!(matches!(err, Error::Validation { field: "name" }));

        let err = BusinessInput::new("Clinic", "  ", "").validate().unwrap_err();
        assert!(matches!(err, Error::Validation { field: "phone" }));

        let err = BusinessInput::new("Clinic", "1", "").validate().unwrap_err();
        assert!(matches!(err, Error::Validation { field: "address" }));
    }

    #[test]
    fn complete_input_passes() {
        assert!(BusinessInput::new("Clinic", "1", "Main St").validate().is_ok());
    }

    #[test]
    fn blank_optionals_are_absent() {
        assert_eq!(BusinessInput::optional(&Some("  ".into())), None);
        assert_eq!(BusinessInput::optional(&Some(" a@b.c ".into())), Some("a@b.c"));
        assert_eq!(BusinessInput::optional(&None), None);
    }
}
