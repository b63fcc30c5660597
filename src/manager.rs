use crate::compat::{String, Vec};
use crate::encoding::{decode_component, decode_uri, encode_component_into};
use crate::error::{ErrorCode, ManagerError, Result};
use crate::param::UrlParam;

/// Owns a URL's decoded base path and its query parameters.
///
/// Parameters keep insertion order, which is also their order in the
/// regenerated URL. Disabled parameters stay in the list but are skipped on
/// serialization; there is no removal operation, disabling is the only way to
/// suppress a parameter.
#[derive(Debug, Clone, Default)]
pub struct UrlManager {
    base: String,
    params: Vec<UrlParam>,
}

impl UrlManager {
    /// Parse a raw URL into a base path and query parameters.
    ///
    /// The string is split at the first `?`. The part before it (or the whole
    /// string) is whole-URI decoded and stored as the base path. The query
    /// part splits on `&`; each pair splits at its first `=` and both halves
    /// are component-decoded. A pair without `=` becomes a parameter with an
    /// empty value. Empty pair segments (`a=1&&b=2`) are skipped. Pairs are
    /// kept in query-string order.
    ///
    /// # Errors
    /// Fails when a decoded component is not valid UTF-8 or a pair has an
    /// empty key.
    pub fn parse(url: &str) -> Result<Self> {
        let (base, query) = match memchr::memchr(b'?', url.as_bytes()) {
            Some(pos) => (&url[..pos], Some(&url[pos + 1..])),
            None => (url, None),
        };

        let mut params = Vec::new();
        if let Some(query) = query {
            for pair in query.split('&').filter(|pair| !pair.is_empty()) {
                let (key, value) = match pair.split_once('=') {
                    Some((key, value)) => (key, value),
                    None => (pair, ""),
                };
                params.push(UrlParam::new(
                    &decode_component(key)?,
                    &decode_component(value)?,
                )?);
            }
        }

        Ok(Self {
            base: decode_uri(base)?,
            params,
        })
    }

    /// The decoded base path (everything before the query string)
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn params(&self) -> &[UrlParam] {
        &self.params
    }

    /// Number of parameters, enabled or not
    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &UrlParam> {
        self.params.iter()
    }

    /// Append a parameter to the end of the list
    pub fn add_param(&mut self, param: UrlParam) {
        self.params.push(param);
    }

    /// Append a batch of parameters, returning how many were added.
    ///
    /// # Errors
    /// Fails with [`ErrorCode::NoParams`] when the batch is empty; the list is
    /// left untouched in that case.
    pub fn add_params<I>(&mut self, params: I) -> Result<usize>
    where
        I: IntoIterator<Item = UrlParam>,
    {
        let before = self.params.len();
        self.params.extend(params);
        let added = self.params.len() - before;
        if added == 0 {
            return Err(ManagerError::new(ErrorCode::NoParams)
                .with_line("add_params was called with an empty batch"));
        }
        Ok(added)
    }

    /// Get the Nth (1-indexed) parameter whose key matches, in list order.
    /// Returns `Ok(None)` when fewer than `occurrence` matches exist.
    ///
    /// # Errors
    /// Fails with [`ErrorCode::OccurrenceZero`] when `occurrence` is zero.
    pub fn get_param(&self, key: &str, occurrence: usize) -> Result<Option<&UrlParam>> {
        Ok(self
            .params
            .iter()
            .filter(|param| param.key() == key)
            .nth(checked_occurrence(occurrence)?))
    }

    /// Mutable variant of [`get_param`](Self::get_param)
    ///
    /// # Errors
    /// Fails with [`ErrorCode::OccurrenceZero`] when `occurrence` is zero.
    pub fn get_param_mut(&mut self, key: &str, occurrence: usize) -> Result<Option<&mut UrlParam>> {
        let nth = checked_occurrence(occurrence)?;
        Ok(self
            .params
            .iter_mut()
            .filter(|param| param.key() == key)
            .nth(nth))
    }

    /// Get all parameters matching `key`, in list order
    pub fn get_params(&self, key: &str) -> Vec<&UrlParam> {
        self.params
            .iter()
            .filter(|param| param.key() == key)
            .collect()
    }

    /// Update the first parameter matching `key` in place, returning it.
    /// Returns `None` when no parameter matches.
    pub fn update_param(&mut self, key: &str, value: &str) -> Option<&UrlParam> {
        let pos = self.params.iter().position(|param| param.key() == key)?;
        self.params[pos].set_value(value);
        Some(&self.params[pos])
    }

    /// Update the first parameter matching `key`, or append a new enabled one.
    ///
    /// # Errors
    /// Fails with [`ErrorCode::EmptyKey`] when inserting with an empty key.
    pub fn upsert_param(&mut self, key: &str, value: &str) -> Result<&UrlParam> {
        let pos = match self.params.iter().position(|param| param.key() == key) {
            Some(pos) => {
                self.params[pos].set_value(value);
                pos
            }
            None => {
                self.add_param(UrlParam::new(key, value)?);
                self.params.len() - 1
            }
        };
        Ok(&self.params[pos])
    }

    /// Serialize back to a URL: base path, `?`, then every enabled parameter
    /// as `key=value` (component-encoded) joined with `&`, in list order.
    /// The `?` is always emitted, even with no enabled parameters.
    pub fn generate_url(&self) -> String {
        let mut out = String::with_capacity(self.base.len() + 1);
        out.push_str(&self.base);
        out.push('?');

        let mut first = true;
        for param in self.params.iter().filter(|param| param.status()) {
            if !first {
                out.push('&');
            }
            first = false;
            encode_component_into(&mut out, param.key());
            out.push('=');
            encode_component_into(&mut out, param.value());
        }
        out
    }
}

impl core::fmt::Display for UrlManager {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.generate_url())
    }
}

impl TryFrom<&str> for UrlManager {
    type Error = ManagerError;

    fn try_from(url: &str) -> Result<Self> {
        Self::parse(url)
    }
}

/// Map a 1-indexed occurrence to a 0-indexed `nth` argument
fn checked_occurrence(occurrence: usize) -> Result<usize> {
    occurrence
        .checked_sub(1)
        .ok_or_else(|| ManagerError::new(ErrorCode::OccurrenceZero))
}
