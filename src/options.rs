//! Parse options.

/// How a parse run tokenizes its input and reacts to bad rows.
///
/// The defaults are comma-delimited, trimmed cells and strict mode.
///
/// # Example
///
/// ```rust
/// use rowbind::ParseOptions;
///
/// let options = ParseOptions::default()
///     .with_delimiter(';')
///     .with_strict_mode(false);
///
/// assert_eq!(options.delimiter(), ';');
/// assert!(options.trim());
/// assert!(!options.is_strict());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    delimiter: char,
    trim: bool,
    strict: bool,
}

impl ParseOptions {
    /// Options for a run that collects every row error instead of aborting.
    pub fn lenient() -> Self {
        Self::default().with_strict_mode(false)
    }

    /// Sets the field delimiter. Must be an ASCII character.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Trims whitespace around headers and cells while tokenizing.
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// In strict mode the first bad row aborts the run.
    pub fn with_strict_mode(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    pub fn trim(&self) -> bool {
        self.trim
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            trim: true,
            strict: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ParseOptions::default();
        assert_eq!(options.delimiter(), ',');
        assert!(options.trim());
        assert!(options.is_strict());
    }

    #[test]
    fn test_lenient() {
        let options = ParseOptions::lenient();
        assert!(!options.is_strict());
        assert_eq!(options.delimiter(), ',');
    }
}
