//! Validation rules for form draft fields

use std::collections::BTreeMap;

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub min_length: Option<usize>,
    pub min_items: Option<usize>,
    pub prefix: Option<&'static str>,
    /// Message shown for any violation of these rules
    pub message: &'static str,
}

impl ValidationRules {
    /// Non-empty text
    pub const fn required(message: &'static str) -> Self {
        Self {
            required: true,
            min: None,
            min_length: None,
            min_items: None,
            prefix: None,
            message,
        }
    }

    /// Finite number not below `min`
    pub const fn number_min(min: f64, message: &'static str) -> Self {
        Self {
            required: true,
            min: Some(min),
            min_length: None,
            min_items: None,
            prefix: None,
            message,
        }
    }

    /// List with at least `min` entries
    pub const fn items_min(min: usize, message: &'static str) -> Self {
        Self {
            required: true,
            min: None,
            min_length: None,
            min_items: Some(min),
            prefix: None,
            message,
        }
    }

    pub const fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub const fn with_prefix(mut self, prefix: &'static str) -> Self {
        self.prefix = Some(prefix);
        self
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str) -> Result<(), String> {
        let value = value.trim();
        if self.required && value.is_empty() {
            return Err(self.message.to_string());
        }

        if let Some(min) = self.min_length {
            if value.chars().count() < min {
                return Err(self.message.to_string());
            }
        }

        if let Some(prefix) = self.prefix {
            if !value.starts_with(prefix) {
                return Err(self.message.to_string());
            }
        }

        Ok(())
    }

    /// Validate a numeric value against the min rule. NaN and infinities are rejected.
    pub fn validate_number(&self, value: f64) -> Result<(), String> {
        if !value.is_finite() {
            return Err(self.message.to_string());
        }

        if let Some(min) = self.min {
            if value < min {
                return Err(self.message.to_string());
            }
        }

        Ok(())
    }

    /// Validate the length of a list value
    pub fn validate_items(&self, count: usize) -> Result<(), String> {
        if let Some(min) = self.min_items {
            if count < min {
                return Err(self.message.to_string());
            }
        }
        Ok(())
    }
}

/// Field-level validation errors keyed by the field's JSON name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a rule check; only the first error per field is kept
    pub fn check(&mut self, field: &'static str, result: Result<(), String>) {
        if let Err(message) = result {
            self.0.entry(field).or_insert(message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_whitespace() {
        let rules = ValidationRules::required("obrigatório");
        assert!(rules.validate_string("   ").is_err());
        assert!(rules.validate_string("ok").is_ok());
    }

    #[test]
    fn test_number_min() {
        let rules = ValidationRules::number_min(1.0, "preço");
        assert!(rules.validate_number(0.99).is_err());
        assert!(rules.validate_number(f64::NAN).is_err());
        assert!(rules.validate_number(f64::INFINITY).is_err());
        assert!(rules.validate_number(1.0).is_ok());
    }

    #[test]
    fn test_prefix_and_length() {
        let rules = ValidationRules::required("hex")
            .with_min_length(4)
            .with_prefix("#");
        assert!(rules.validate_string("#FFF").is_ok());
        assert!(rules.validate_string("#FF").is_err());
        assert!(rules.validate_string("FFFF").is_err());
    }

    #[test]
    fn test_field_errors_keep_first_message() {
        let mut errors = FieldErrors::new();
        errors.check("name", Err("first".into()));
        errors.check("name", Err("second".into()));
        errors.check("value", Ok(()));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("name"), Some("first"));
        assert!(errors.into_result().is_err());
    }
}
