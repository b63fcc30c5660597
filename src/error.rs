use crate::compat::{String, Vec};

/// Short error codes, grouped by numeric range:
/// 0xx construction, 1xx method, 2xx generic/bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Parameter constructed with an empty key
    EmptyKey,
    /// Percent-encoded sequence did not decode to valid UTF-8
    InvalidEncoding,
    /// Batch add called with no parameters
    NoParams,
    /// Occurrence index of zero (occurrences are 1-indexed)
    OccurrenceZero,
}

impl ErrorCode {
    /// The code rendered in formatted output
    pub fn code(self) -> &'static str {
        match self {
            Self::EmptyKey => "001",
            Self::InvalidEncoding => "002",
            Self::NoParams => "101",
            Self::OccurrenceZero => "201",
        }
    }

    /// Primary human-readable message for this code
    pub fn message(self) -> &'static str {
        match self {
            Self::EmptyKey => "Constructor error - parameter key must be a non-empty string",
            Self::InvalidEncoding => "Constructor error - invalid percent-encoded sequence",
            Self::NoParams => "Method error - at least one parameter is required",
            Self::OccurrenceZero => "Bounds error - occurrence is 1-indexed and must be at least 1",
        }
    }
}

/// Error raised by [`UrlManager`](crate::UrlManager) and [`UrlParam`](crate::UrlParam)
/// operations.
///
/// Carries a short [`ErrorCode`] plus an ordered list of supplementary detail
/// lines for diagnostics. [`format`](Self::format) renders everything as one
/// multi-line string; `Display` does the same.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerError {
    code: ErrorCode,
    lines: Vec<String>,
}

impl ManagerError {
    pub fn new(code: ErrorCode) -> Self {
        Self {
            code,
            lines: Vec::new(),
        }
    }

    /// Builder-style variant of [`add_line`](Self::add_line)
    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Push an extra line of diagnostic detail
    pub fn add_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Render the code, primary message, and detail lines as one multi-line string
    pub fn format(&self) -> String {
        let mut out = String::new();
        out.push_str(self.code.code());
        out.push_str(": ");
        out.push_str(self.code.message());
        out.push('\n');
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

impl core::fmt::Display for ManagerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.format())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ManagerError {}

/// Result type for manager operations
pub type Result<T> = core::result::Result<T, ManagerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_code_and_message() {
        let error = ManagerError::new(ErrorCode::EmptyKey);
        assert_eq!(
            error.format(),
            "001: Constructor error - parameter key must be a non-empty string\n"
        );
    }

    #[test]
    fn test_format_detail_lines_in_order() {
        let mut error = ManagerError::new(ErrorCode::NoParams).with_line("first detail");
        error.add_line("second detail");
        let formatted = error.format();
        let lines: Vec<&str> = formatted.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("101: "));
        assert_eq!(lines[1], "first detail");
        assert_eq!(lines[2], "second detail");
    }

    #[test]
    fn test_code_ranges() {
        assert_eq!(ErrorCode::EmptyKey.code(), "001");
        assert_eq!(ErrorCode::InvalidEncoding.code(), "002");
        assert_eq!(ErrorCode::NoParams.code(), "101");
        assert_eq!(ErrorCode::OccurrenceZero.code(), "201");
    }
}
