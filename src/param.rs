use crate::compat::{String, ToString, format};
use crate::error::{ErrorCode, ManagerError, Result};

/// One query-string key/value pair with an enabled/disabled display state.
///
/// Disabled parameters stay in their manager's list but are skipped when the
/// URL is regenerated. The key is fixed at construction; only the value and
/// the enabled flag can change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParam {
    key: String,
    value: String,
    enabled: bool,
}

impl UrlParam {
    /// Create a parameter, enabled by default.
    ///
    /// # Errors
    /// Returns an [`ErrorCode::EmptyKey`] error when `key` is empty.
    pub fn new(key: &str, value: &str) -> Result<Self> {
        if key.is_empty() {
            return Err(ManagerError::new(ErrorCode::EmptyKey)
                .with_line("'key' must contain at least one character")
                .with_line(format!("value: {value:?}")));
        }
        Ok(Self {
            key: key.to_string(),
            value: value.to_string(),
            enabled: true,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    /// Include this parameter in generated URLs. No-op if already enabled.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Exclude this parameter from generated URLs. No-op if already disabled.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Flip the enabled state
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    /// Current enabled state
    pub fn status(&self) -> bool {
        self.enabled
    }
}
