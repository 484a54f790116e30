//! Fluent field validation for form submission.

use regex::Regex;

use crate::error::{FieldValidationError, FormError};

/// Collects the first failing rule of each field.
///
/// # Example
///
/// ```
/// use veggie_lib::forms::Validator;
///
/// let result = Validator::new()
///     .field("name", "")
///     .required("Name is required")
///     .field("email", "ops@veggie.example")
///     .email("Invalid email")
///     .validate();
///
/// let errors = result.unwrap_err();
/// assert_eq!(errors.field_errors().len(), 1);
/// assert_eq!(errors.field_errors()[0].field, "name");
/// ```
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldValidationError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start checking a field.
    pub fn field<'v, V: ?Sized>(self, name: impl Into<String>, value: &'v V) -> FieldCheck<'v, V> {
        FieldCheck {
            validator: self,
            name: name.into(),
            value,
            failed: None,
        }
    }

    /// `Ok` if no field failed, otherwise [`FormError::Invalid`].
    pub fn validate(self) -> Result<(), FormError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(FormError::Invalid(self.errors))
        }
    }
}

/// Rules for a single field. Only the first failing rule is reported.
pub struct FieldCheck<'v, V: ?Sized> {
    validator: Validator,
    name: String,
    value: &'v V,
    failed: Option<String>,
}

impl<'v, V: ?Sized> FieldCheck<'v, V> {
    /// Add a custom rule; `ok` returns `true` when the value is acceptable.
    pub fn rule(mut self, ok: impl FnOnce(&V) -> bool, msg: impl Into<String>) -> Self {
        if self.failed.is_none() && !ok(self.value) {
            self.failed = Some(msg.into());
        }
        self
    }

    /// Continue to the next field.
    pub fn field<'w, W: ?Sized>(self, name: impl Into<String>, value: &'w W) -> FieldCheck<'w, W> {
        self.finish().field(name, value)
    }

    /// Finish and run the collected checks.
    pub fn validate(self) -> Result<(), FormError> {
        self.finish().validate()
    }

    fn finish(self) -> Validator {
        let mut validator = self.validator;
        if let Some(message) = self.failed {
            validator
                .errors
                .push(FieldValidationError::new(self.name, message));
        }
        validator
    }
}

impl FieldCheck<'_, str> {
    /// Require the field to be non-empty.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.rule(|v| !v.trim().is_empty(), msg)
    }

    /// Require minimum length (in characters).
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        self.rule(|v| v.chars().count() >= min, msg)
    }

    /// Require the value to match a regex pattern. An invalid pattern never matches.
    pub fn pattern(self, pattern: &str, msg: impl Into<String>) -> Self {
        self.rule(
            |v| Regex::new(pattern).is_ok_and(|re| re.is_match(v)),
            msg,
        )
    }

    /// Require a valid email address. Empty passes; use `required` for that.
    pub fn email(self, msg: impl Into<String>) -> Self {
        self.rule(
            |v| v.is_empty() || email_address::EmailAddress::is_valid(v),
            msg,
        )
    }

    /// Require the value to be one of `options`.
    pub fn one_of<S: AsRef<str>>(self, options: &[S], msg: impl Into<String>) -> Self {
        self.rule(|v| options.iter().any(|o| o.as_ref() == v), msg)
    }
}

impl FieldCheck<'_, i64> {
    pub fn nonnegative(self, msg: impl Into<String>) -> Self {
        self.rule(|&v| v >= 0, msg)
    }
}

impl<T> FieldCheck<'_, Option<T>> {
    /// Require that an option is chosen.
    pub fn selected(self, msg: impl Into<String>) -> Self {
        self.rule(Option::is_some, msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_failing_rule_wins() {
        let err = Validator::new()
            .field("phone", "")
            .required("Phone is required")
            .pattern(r"^\d{3}-\d{3}-\d{4}$", "Invalid phone")
            .validate()
            .unwrap_err();
        assert_eq!(
            err.field_errors(),
            &[FieldValidationError::new("phone", "Phone is required")]
        );
    }

    #[test]
    fn test_every_failing_field_is_reported() {
        let err = Validator::new()
            .field("a", "")
            .required("a")
            .field("b", &-1i64)
            .nonnegative("b")
            .field("c", &None::<u32>)
            .selected("c")
            .validate()
            .unwrap_err();
        let fields: Vec<_> = err.field_errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_passing_fields_validate() {
        assert!(
            Validator::new()
                .field("status", "Active")
                .one_of(&["Active", "Inactive"], "bad status")
                .field("email", "")
                .email("bad email")
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn test_bad_pattern_never_matches() {
        assert!(Validator::new().field("x", "abc").pattern("(", "nope").validate().is_err());
    }
}
