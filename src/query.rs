//! Ordered query parameter handling.
//!
//! The Upbit token verifier hashes a canonical form of the query string, so
//! parameter order matters and must survive the round trip from request URL
//! to signature. [`QueryParams`] is therefore an ordered list of pairs, not a
//! map, and supports repeated keys for multi-valued parameters.

use std::borrow::Cow;

/// Ordered collection of query parameters.
///
/// Insertion order is preserved; repeated keys are serialized as repeated
/// `key=value` pairs, matching form-encoding rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a single `key=value` pair.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Appends one pair per value under the same key.
    pub fn push_all<I, V>(&mut self, key: &str, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        for value in values {
            self.pairs.push((key.to_string(), value.into()));
        }
    }

    /// Returns `true` if no parameters have been added.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Iterates over the pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serializes the parameters as a form-encoded query string.
    ///
    /// Spaces are encoded as `+`, other reserved characters are
    /// percent-escaped, and pairs are joined with `&` in insertion order.
    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", form_encode(k), form_encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Returns the canonical string the token verifier hashes.
    ///
    /// This is the encoded query string with percent-escapes decoded back out
    /// (`+` for spaces is left in place). The verifier expects this
    /// decoded-but-escaped form, so the encode/decode round trip is required,
    /// not redundant.
    pub fn canonical(&self) -> String {
        let encoded = self.encode();
        // SAFETY: decoding a string this crate just percent-encoded cannot
        // produce invalid UTF-8.
        urlencoding::decode(&encoded)
            .map(Cow::into_owned)
            .expect("percent-decoding our own encoding is infallible")
    }
}

/// Form-encodes a single component: percent-escapes reserved characters,
/// then rewrites the space escape to `+`.
fn form_encode(s: &str) -> String {
    urlencoding::encode(s).replace("%20", "+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_preserves_insertion_order() {
        let mut params = QueryParams::new();
        params.push("currency", "KRW");
        params.push("state", "accepted");
        params.push("page", "1");
        assert_eq!(params.encode(), "currency=KRW&state=accepted&page=1");
    }

    #[test]
    fn test_encode_multi_valued_keys() {
        let mut params = QueryParams::new();
        params.push_all("uuids[]", ["a-1", "b-2"]);
        params.push("currency", "KRW");
        assert_eq!(
            params.encode(),
            "uuids%5B%5D=a-1&uuids%5B%5D=b-2&currency=KRW"
        );
    }

    #[test]
    fn test_encode_escapes_spaces_as_plus() {
        let mut params = QueryParams::new();
        params.push("k", "a b");
        params.push("k2", "x");
        assert_eq!(params.encode(), "k=a+b&k2=x");
    }

    #[test]
    fn test_canonical_decodes_escapes_but_keeps_plus() {
        let mut params = QueryParams::new();
        params.push("uuids[]", "a-1");
        params.push("note", "a b");
        assert_eq!(params.encode(), "uuids%5B%5D=a-1&note=a+b");
        assert_eq!(params.canonical(), "uuids[]=a-1&note=a+b");
    }

    #[test]
    fn test_empty_params() {
        let params = QueryParams::new();
        assert!(params.is_empty());
        assert_eq!(params.encode(), "");
        assert_eq!(params.canonical(), "");
    }
}
