//! Validation outcomes.
//!
//! A [`ValidationOutcome`] carries zero or more error messages; it is valid
//! exactly when it carries none. Outcomes from several validators are merged
//! by concatenation, which keeps the validators' declaration order.

use stillwater::prelude::*;

/// The result of running one or more validators.
///
/// # Example
///
/// ```rust
/// use rowbind::ValidationOutcome;
/// use stillwater::prelude::*;
///
/// let outcome = ValidationOutcome::valid()
///     .combine(ValidationOutcome::error("name must not be blank"))
///     .combine(ValidationOutcome::error("age must be at least 18"));
///
/// assert!(!outcome.is_valid());
/// assert_eq!(outcome.errors(), ["name must not be blank", "age must be at least 18"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    errors: Vec<String>,
}

impl ValidationOutcome {
    /// An outcome with no errors.
    pub fn valid() -> Self {
        Self::default()
    }

    /// An outcome with a single error.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            errors: vec![message.into()],
        }
    }

    /// Returns an error outcome when `passed` is false.
    pub fn check(passed: bool, message: &str) -> Self {
        if passed {
            Self::valid()
        } else {
            Self::error(message)
        }
    }

    /// Appends the other outcome's errors after this one's.
    pub fn merge(&mut self, other: ValidationOutcome) {
        self.errors.extend(other.errors);
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}

impl Semigroup for ValidationOutcome {
    fn combine(mut self, other: Self) -> Self {
        self.merge(other);
        self
    }
}

impl FromIterator<ValidationOutcome> for ValidationOutcome {
    fn from_iter<I: IntoIterator<Item = ValidationOutcome>>(iter: I) -> Self {
        iter.into_iter()
            .fold(ValidationOutcome::valid(), |acc, next| acc.combine(next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_is_empty() {
        let outcome = ValidationOutcome::valid();
        assert!(outcome.is_valid());
        assert!(outcome.errors().is_empty());
    }

    #[test]
    fn test_check() {
        assert!(ValidationOutcome::check(true, "nope").is_valid());
        assert_eq!(ValidationOutcome::check(false, "nope").errors(), ["nope"]);
    }

    #[test]
    fn test_merge_appends_in_order() {
        let mut outcome = ValidationOutcome::error("first");
        outcome.merge(ValidationOutcome::valid());
        outcome.merge(ValidationOutcome::error("second"));
        assert_eq!(outcome.into_errors(), vec!["first", "second"]);
    }

    #[test]
    fn test_semigroup_associativity() {
        let a = ValidationOutcome::error("1");
        let b = ValidationOutcome::error("2");
        let c = ValidationOutcome::error("3");

        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        assert_eq!(left, right);
    }

    #[test]
    fn test_collect_from_iterator() {
        let outcome: ValidationOutcome = vec![
            ValidationOutcome::error("a"),
            ValidationOutcome::valid(),
            ValidationOutcome::error("b"),
        ]
        .into_iter()
        .collect();
        assert_eq!(outcome.errors(), ["a", "b"]);
    }
}
