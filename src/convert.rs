//! Raw cell conversion.
//!
//! [`convert`] turns one raw cell into a typed [`Value`]. It is a pure
//! function: the only per-field input besides the target type is an optional
//! [`DatePattern`], compiled once when the schema is registered.

use std::fmt::{self, Display};
use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::NaiveDate;

use crate::error::{ConversionError, SchemaError};
use crate::value::{TargetType, Value};

/// Pattern assumed for date fields that declare none.
pub const DEFAULT_DATE_PATTERN: &str = "yyyy-MM-dd";

/// A compiled date format pattern.
///
/// Patterns use the familiar letter notation: `yyyy`/`yy` for the year,
/// `M`/`MM` (numeric), `MMM` (short name) or `MMMM` (full name) for the month,
/// `d`/`dd` for the day of month. Text inside single quotes is literal and
/// `''` is a literal quote, both inside and outside quoted text. Any other
/// letter is rejected.
///
/// # Example
///
/// ```rust
/// use rowbind::DatePattern;
///
/// let pattern = DatePattern::parse("yyyyMMdd").unwrap();
/// assert_eq!(pattern.as_str(), "yyyyMMdd");
///
/// assert!(DatePattern::parse("yyyy-MM-dd HH:mm").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    source: String,
    format: String,
}

impl DatePattern {
    /// Compiles a pattern.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::InvalidDatePattern` for unknown letters, an
    /// unterminated quote, or a pattern missing a year, month or day field.
    pub fn parse(pattern: &str) -> Result<Self, SchemaError> {
        let invalid = |reason: String| SchemaError::InvalidDatePattern {
            pattern: pattern.to_string(),
            reason,
        };

        let chars: Vec<char> = pattern.chars().collect();
        let mut format = String::with_capacity(pattern.len() * 2);
        let (mut year, mut month, mut day) = (false, false, false);
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];

            if c == '\'' {
                if chars.get(i + 1) == Some(&'\'') {
                    format.push('\'');
                    i += 2;
                    continue;
                }
                i += 1;
                loop {
                    match (chars.get(i), chars.get(i + 1)) {
                        (Some('\''), Some('\'')) => {
                            format.push('\'');
                            i += 2;
                        }
                        (Some('\''), _) => {
                            i += 1;
                            break;
                        }
                        (Some(&literal), _) => {
                            push_literal(&mut format, literal);
                            i += 1;
                        }
                        (None, _) => {
                            return Err(invalid("unterminated quoted text".to_string()));
                        }
                    }
                }
                continue;
            }

            if !c.is_ascii_alphabetic() {
                push_literal(&mut format, c);
                i += 1;
                continue;
            }

            let run = chars[i..].iter().take_while(|&&r| r == c).count();
            let spec = match (c, run) {
                ('y' | 'u', 2) => "%y",
                ('y' | 'u', _) => "%Y",
                ('M', 1 | 2) => "%m",
                ('M', 3) => "%b",
                ('M', _) => "%B",
                ('d', 1 | 2) => "%d",
                _ => {
                    return Err(invalid(format!(
                        "unsupported pattern field '{}'",
                        c.to_string().repeat(run)
                    )))
                }
            };
            match c {
                'y' | 'u' => year = true,
                'M' => month = true,
                _ => day = true,
            }
            format.push_str(spec);
            i += run;
        }

        if !(year && month && day) {
            return Err(invalid(
                "pattern must contain year, month and day fields".to_string(),
            ));
        }

        Ok(Self {
            source: pattern.to_string(),
            format,
        })
    }

    /// The pattern as declared.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    fn parse_date(&self, value: &str) -> Result<NaiveDate, chrono::ParseError> {
        NaiveDate::parse_from_str(value, &self.format)
    }
}

impl Default for DatePattern {
    fn default() -> Self {
        Self {
            source: DEFAULT_DATE_PATTERN.to_string(),
            format: "%Y-%m-%d".to_string(),
        }
    }
}

impl Display for DatePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn push_literal(format: &mut String, c: char) {
    if c == '%' {
        format.push_str("%%");
    } else {
        format.push(c);
    }
}

/// Converts a raw cell into a value of the target type.
///
/// The raw string is trimmed first. An empty or all-whitespace cell is an
/// absent value (`Ok(None)`) for every target type. Booleans accept only
/// `true`/`false` in any case. Dates use `pattern`, or
/// [`DEFAULT_DATE_PATTERN`] when none is given; other targets ignore it.
///
/// # Example
///
/// ```rust
/// use rowbind::{convert, TargetType, Value};
///
/// assert_eq!(convert(" 25 ", TargetType::Int32, None).unwrap(), Some(Value::Int32(25)));
/// assert_eq!(convert("   ", TargetType::Int32, None).unwrap(), None);
/// assert!(convert("yes", TargetType::Boolean, None).is_err());
/// ```
pub fn convert(
    raw: &str,
    target: TargetType,
    pattern: Option<&DatePattern>,
) -> Result<Option<Value>, ConversionError> {
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }

    let fail = |cause: &dyn Display| ConversionError::new(value, target, cause);

    let converted = match target {
        TargetType::Text => Value::Text(value.to_string()),
        TargetType::Int32 => Value::Int32(value.parse::<i32>().map_err(|e| fail(&e))?),
        TargetType::Int64 => Value::Int64(value.parse::<i64>().map_err(|e| fail(&e))?),
        TargetType::Float64 => Value::Float64(value.parse::<f64>().map_err(|e| fail(&e))?),
        TargetType::Decimal => {
            Value::Decimal(BigDecimal::from_str(value).map_err(|e| fail(&e))?)
        }
        TargetType::Boolean => {
            if value.eq_ignore_ascii_case("true") {
                Value::Boolean(true)
            } else if value.eq_ignore_ascii_case("false") {
                Value::Boolean(false)
            } else {
                return Err(fail(&"expected 'true' or 'false'"));
            }
        }
        TargetType::Date => {
            let date = match pattern {
                Some(pattern) => pattern.parse_date(value),
                None => DatePattern::default().parse_date(value),
            };
            let pattern = pattern.map_or(DEFAULT_DATE_PATTERN, DatePattern::as_str);
            Value::Date(date.map_err(|e| fail(&format!("{} (pattern '{}')", e, pattern)))?)
        }
    };

    Ok(Some(converted))
}
