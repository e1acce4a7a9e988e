//! Field validators.
//!
//! [`Validator`] is a closed set of built-in rules plus one open variant for
//! caller-supplied [`FieldRule`]s. Messages are templates in which `{value}`
//! is replaced by the rule's parameter once, when the validator is built.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use bigdecimal::BigDecimal;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::validation::ValidationOutcome;
use crate::value::{TargetType, Value};

pub const NOT_BLANK_MESSAGE: &str = "Field must not be blank";
pub const MIN_MESSAGE: &str = "Value must be greater than or equal to {value}";
pub const MAX_MESSAGE: &str = "Value must be less than or equal to {value}";
pub const EMAIL_MESSAGE: &str = "Invalid email format";

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("email pattern is valid")
});

/// Substitutes `{value}` in a message template.
///
/// Custom rules use this to render their messages once, at construction.
///
/// # Example
///
/// ```rust
/// use rowbind::render_message;
///
/// assert_eq!(
///     render_message("Vendor code should contain '{value}'", "VC"),
///     "Vendor code should contain 'VC'"
/// );
/// ```
pub fn render_message(template: &str, value: impl fmt::Display) -> String {
    template.replace("{value}", &value.to_string())
}

/// A caller-supplied validation rule.
///
/// Receives the field's current value, `None` when the field is absent.
///
/// # Example
///
/// ```rust
/// use rowbind::{render_message, FieldRule, ValidationOutcome, Value};
///
/// struct VendorPrefix {
///     prefix: String,
///     message: String,
/// }
///
/// impl VendorPrefix {
///     fn new(prefix: &str) -> Self {
///         Self {
///             prefix: prefix.to_string(),
///             message: render_message("Vendor code should contain '{value}'", prefix),
///         }
///     }
/// }
///
/// impl FieldRule for VendorPrefix {
///     fn validate(&self, value: Option<&Value>) -> ValidationOutcome {
///         match value.and_then(Value::as_text) {
///             Some(code) if !code.contains(&self.prefix) => ValidationOutcome::error(&self.message),
///             _ => ValidationOutcome::valid(),
///         }
///     }
/// }
///
/// let rule = VendorPrefix::new("VC");
/// assert!(rule.validate(Some(&Value::Text("VC1234".into()))).is_valid());
/// assert!(!rule.validate(Some(&Value::Text("VS1234".into()))).is_valid());
/// ```
pub trait FieldRule: Send + Sync {
    fn validate(&self, value: Option<&Value>) -> ValidationOutcome;

    /// Name shown in debug output.
    fn name(&self) -> &str {
        "custom"
    }
}

/// A rule built from a predicate and a fixed message.
///
/// Created by [`Validator::predicate`].
pub struct Predicate<F> {
    message: String,
    check: F,
}

impl<F> FieldRule for Predicate<F>
where
    F: Fn(Option<&Value>) -> bool + Send + Sync,
{
    fn validate(&self, value: Option<&Value>) -> ValidationOutcome {
        ValidationOutcome::check((self.check)(value), &self.message)
    }

    fn name(&self) -> &str {
        "predicate"
    }
}

/// A validator attached to a schema field.
///
/// Only `NotBlank` rejects an absent value; the other built-ins treat absence
/// as vacuously valid.
///
/// # Example
///
/// ```rust
/// use rowbind::{Validator, Value};
///
/// let adult = Validator::min(18).with_message("Age must be at least {value}");
///
/// assert!(adult.validate(Some(&Value::Int32(18))).is_valid());
/// assert_eq!(
///     adult.validate(Some(&Value::Int32(17))).errors(),
///     ["Age must be at least 18"]
/// );
/// assert!(adult.validate(None).is_valid());
/// ```
#[derive(Clone)]
pub enum Validator {
    /// Present and, for text, non-empty after trimming.
    NotBlank { message: String },
    /// Numeric value at least `bound`.
    Min { bound: i64, message: String },
    /// Numeric value at most `bound`.
    Max { bound: i64, message: String },
    /// Text shaped like `local@domain.tld`.
    Email { message: String },
    /// Caller-supplied rule.
    Custom(Arc<dyn FieldRule>),
}

impl Validator {
    pub fn not_blank() -> Self {
        Validator::NotBlank {
            message: NOT_BLANK_MESSAGE.to_string(),
        }
    }

    /// Inclusive lower bound.
    pub fn min(bound: i64) -> Self {
        Validator::Min {
            bound,
            message: render_message(MIN_MESSAGE, bound),
        }
    }

    /// Inclusive upper bound.
    pub fn max(bound: i64) -> Self {
        Validator::Max {
            bound,
            message: render_message(MAX_MESSAGE, bound),
        }
    }

    pub fn email() -> Self {
        Validator::Email {
            message: EMAIL_MESSAGE.to_string(),
        }
    }

    /// Wraps a caller-supplied rule.
    pub fn custom<R: FieldRule + 'static>(rule: R) -> Self {
        Validator::Custom(Arc::new(rule))
    }

    /// A custom rule that fails with `message` when `check` returns false.
    pub fn predicate<F>(message: impl Into<String>, check: F) -> Self
    where
        F: Fn(Option<&Value>) -> bool + Send + Sync + 'static,
    {
        Self::custom(Predicate {
            message: message.into(),
            check,
        })
    }

    /// Replaces the message of a built-in validator.
    ///
    /// `{value}` is substituted with the bound now. Custom rules own their
    /// messages and are returned unchanged.
    pub fn with_message(self, template: &str) -> Self {
        match self {
            Validator::NotBlank { .. } => Validator::NotBlank {
                message: template.to_string(),
            },
            Validator::Min { bound, .. } => Validator::Min {
                bound,
                message: render_message(template, bound),
            },
            Validator::Max { bound, .. } => Validator::Max {
                bound,
                message: render_message(template, bound),
            },
            Validator::Email { .. } => Validator::Email {
                message: template.to_string(),
            },
            custom @ Validator::Custom(_) => custom,
        }
    }

    /// Short name used in messages and schema export.
    pub fn kind(&self) -> &'static str {
        match self {
            Validator::NotBlank { .. } => "not-blank",
            Validator::Min { .. } => "min",
            Validator::Max { .. } => "max",
            Validator::Email { .. } => "email",
            Validator::Custom(_) => "custom",
        }
    }

    /// Whether this validator can meaningfully check values of `target`.
    pub fn applies_to(&self, target: TargetType) -> bool {
        match self {
            Validator::Min { .. } | Validator::Max { .. } => target.is_numeric(),
            Validator::Email { .. } => target == TargetType::Text,
            Validator::NotBlank { .. } | Validator::Custom(_) => true,
        }
    }

    /// Checks a field's current value.
    pub fn validate(&self, value: Option<&Value>) -> ValidationOutcome {
        match self {
            Validator::NotBlank { message } => {
                let blank = match value {
                    None => true,
                    Some(Value::Text(s)) => s.trim().is_empty(),
                    Some(_) => false,
                };
                ValidationOutcome::check(!blank, message)
            }
            Validator::Min { bound, message } => {
                ValidationOutcome::check(within_bound(value, *bound, Ordering::Less), message)
            }
            Validator::Max { bound, message } => {
                ValidationOutcome::check(within_bound(value, *bound, Ordering::Greater), message)
            }
            Validator::Email { message } => match value.and_then(Value::as_text) {
                Some(text) => ValidationOutcome::check(EMAIL.is_match(text), message),
                None => ValidationOutcome::valid(),
            },
            Validator::Custom(rule) => rule.validate(value),
        }
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validator::NotBlank { message } | Validator::Email { message } => f
                .debug_struct(self.kind())
                .field("message", message)
                .finish(),
            Validator::Min { bound, message } | Validator::Max { bound, message } => f
                .debug_struct(self.kind())
                .field("bound", bound)
                .field("message", message)
                .finish(),
            Validator::Custom(rule) => f.debug_tuple("custom").field(&rule.name()).finish(),
        }
    }
}

/// Whether `value` is not on the `outside` side of `bound`.
///
/// Absent and non-numeric values pass. NaN is unordered, so it fails both
/// bounds.
fn within_bound(value: Option<&Value>, bound: i64, outside: Ordering) -> bool {
    match value {
        None => true,
        Some(Value::Float64(n)) if n.is_nan() => false,
        Some(v) => compare_to_bound(v, bound) != Some(outside),
    }
}

/// Orders a numeric value against an integer bound. `None` for non-numeric
/// values and NaN.
fn compare_to_bound(value: &Value, bound: i64) -> Option<Ordering> {
    match value {
        Value::Int32(n) => Some(i64::from(*n).cmp(&bound)),
        Value::Int64(n) => Some(n.cmp(&bound)),
        Value::Float64(n) => n.partial_cmp(&(bound as f64)),
        Value::Decimal(d) => Some(d.cmp(&BigDecimal::from(bound))),
        _ => None,
    }
}
