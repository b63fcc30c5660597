use crate::compat::{String, Vec, format};
use crate::error::{ErrorCode, ManagerError, Result};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Component percent-encode set.
/// Escapes everything except ASCII alphanumerics and `- _ . ! ~ * ' ( )`,
/// matching `encodeURIComponent`.
pub const COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Write a percent-encoded query component directly to buffer
/// Manually iterates to avoid write! macro overhead
pub fn encode_component_into(buffer: &mut String, input: &str) {
    // Reserve space to reduce reallocations
    buffer.reserve(input.len());

    for chunk in utf8_percent_encode(input, COMPONENT_SET) {
        buffer.push_str(chunk);
    }
}

/// Decode a percent-encoded query component (key or value).
/// Every percent sequence is decoded, including reserved characters.
pub fn decode_component(input: &str) -> Result<String> {
    percent_encoding::percent_decode_str(input)
        .decode_utf8()
        .map(Into::into)
        .map_err(|_| {
            ManagerError::new(ErrorCode::InvalidEncoding).with_line(format!("component: {input}"))
        })
}

/// Characters whose escapes survive whole-URI decoding.
/// These are the URI-reserved characters `decodeURI` leaves percent-encoded.
fn is_uri_reserved(byte: u8) -> bool {
    matches!(
        byte,
        b';' | b'/' | b'?' | b':' | b'@' | b'&' | b'=' | b'+' | b'$' | b',' | b'#'
    )
}

fn hex_pair(bytes: &[u8], at: usize) -> Option<u8> {
    let hi = char::from(*bytes.get(at)?).to_digit(16)?;
    let lo = char::from(*bytes.get(at + 1)?).to_digit(16)?;
    Some((hi * 16 + lo) as u8)
}

/// Whole-URI decoding for the base path.
///
/// Decodes percent sequences except those for URI-reserved characters, which
/// stay escaped so the path keeps its structure (`%2F` does not become a path
/// separator). This is deliberately NOT the same rule as [`decode_component`].
/// Malformed `%` sequences pass through literally.
pub fn decode_uri(input: &str) -> Result<String> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'%' => match hex_pair(bytes, i + 1) {
                Some(byte) if !is_uri_reserved(byte) => {
                    out.push(byte);
                    i += 3;
                }
                // Reserved escape or malformed sequence: keep as-is
                _ => {
                    out.push(b'%');
                    i += 1;
                }
            },
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8(out).map_err(|_| {
        ManagerError::new(ErrorCode::InvalidEncoding).with_line(format!("base path: {input}"))
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn encode_component(input: &str) -> String {
        let mut out = String::new();
        encode_component_into(&mut out, input);
        out
    }

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component("hello world"), "hello%20world");
        assert_eq!(encode_component("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode_component("safe-_.!~*'()"), "safe-_.!~*'()");
        assert_eq!(encode_component("caf\u{e9}"), "caf%C3%A9");
    }

    #[test]
    fn test_decode_component() {
        assert_eq!(decode_component("hello%20world").unwrap(), "hello world");
        assert_eq!(decode_component("a%26b%3Dc").unwrap(), "a&b=c");
        assert_eq!(decode_component("caf%C3%A9").unwrap(), "caf\u{e9}");
        // Plus is a literal plus, not a space
        assert_eq!(decode_component("a+b").unwrap(), "a+b");
    }

    #[test]
    fn test_decode_component_invalid_utf8() {
        let err = decode_component("%FF").unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidEncoding);
    }

    #[test]
    fn test_decode_uri_keeps_reserved_escapes() {
        assert_eq!(decode_uri("http://x/a%2Fb").unwrap(), "http://x/a%2Fb");
        assert_eq!(decode_uri("http://x/a%26b").unwrap(), "http://x/a%26b");
        assert_eq!(decode_uri("http://x/a%20b").unwrap(), "http://x/a b");
    }

    #[test]
    fn test_decode_uri_malformed_passthrough() {
        assert_eq!(decode_uri("100%").unwrap(), "100%");
        assert_eq!(decode_uri("a%GGb").unwrap(), "a%GGb");
    }

    #[test]
    fn test_decode_rules_diverge() {
        // The same input decodes differently under the two rules
        assert_eq!(decode_uri("a%2Fb").unwrap(), "a%2Fb");
        assert_eq!(decode_component("a%2Fb").unwrap(), "a/b");
    }
}
