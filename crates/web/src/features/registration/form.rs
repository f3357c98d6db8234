use validator::{Validate, ValidationError};

use super::sports::is_allowed_sport;

/// Fields checked in this order; the first failing one names the rejection.
const FIELD_PRIORITY: [&str; 2] = ["name", "sport"];

/// Submitted registration form. Absent fields are empty strings.
#[derive(Debug, Clone, Default, Validate)]
pub struct RegisterForm {
    #[validate(length(min = 1, message = "Missing name"))]
    pub name: String,

    #[validate(length(min = 1, message = "Missing sport"))]
    #[validate(custom(function = "validate_sport"))]
    pub sport: String,
}

impl RegisterForm {
    /// Build the form from decoded `key=value` pairs. When a field is sent
    /// more than once the first value wins; unknown fields are ignored.
    pub fn from_fields(fields: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut name = None;
        let mut sport = None;

        for (key, value) in fields {
            match key.as_str() {
                "name" => {
                    name.get_or_insert(value);
                }
                "sport" => {
                    sport.get_or_insert(value);
                }
                _ => {}
            }
        }

        Self {
            name: name.unwrap_or_default(),
            sport: sport.unwrap_or_default(),
        }
    }

    /// Validate the form and return the message to show the user for the
    /// first failing field.
    pub fn check(&self) -> Result<(), String> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };

        let field_errors = errors.field_errors();
        let message = FIELD_PRIORITY
            .iter()
            .filter_map(|field| field_errors.get(*field))
            .flat_map(|errors| errors.iter())
            .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid registration".to_string());

        Err(message)
    }
}

// Empty values are reported by the length rule.
fn validate_sport(sport: &str) -> Result<(), ValidationError> {
    if sport.is_empty() || is_allowed_sport(sport) {
        return Ok(());
    }

    let mut error = ValidationError::new("invalid_sport");
    error.message = Some("Invalid sport".into());
    Err(error)
}
