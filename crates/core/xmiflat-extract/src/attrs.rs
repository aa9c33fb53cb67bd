//! Attribute lookup and typed parsing.
//!
//! Lookup never fails: a missing key is `None`. The typed readers turn a
//! present-but-malformed value into an [`AttrError`] and leave it to the
//! caller to decide whether absence is fatal.

use xmiflat_types::AttrError;

/// Attributes of one element, in document order.
///
/// Unprefixed attributes are keyed by local name; attributes in the XMI
/// namespace are keyed as `xmi:<local>` whatever prefix the document binds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Raw value of `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Owned string value, `None` if absent.
    pub fn string(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_string)
    }

    /// Integer that must be present.
    pub fn required_int<T: std::str::FromStr>(&self, key: &str) -> Result<T, AttrError> {
        self.optional_int(key)?
            .ok_or_else(|| AttrError::missing(key))
    }

    /// Integer that may be absent; malformed values are still errors.
    pub fn optional_int<T: std::str::FromStr>(&self, key: &str) -> Result<Option<T>, AttrError> {
        self.get(key).map(|raw| parse_int(key, raw)).transpose()
    }

    pub fn optional_float(&self, key: &str) -> Result<Option<f64>, AttrError> {
        self.get(key)
            .map(|raw| {
                raw.trim().parse::<f64>().map_err(|_| AttrError::NotFloat {
                    attribute: key.to_string(),
                    value: raw.to_string(),
                })
            })
            .transpose()
    }

    pub fn optional_bool(&self, key: &str) -> Result<Option<bool>, AttrError> {
        self.get(key).map(|raw| parse_bool(key, raw)).transpose()
    }

    /// Whitespace-separated integer list; absent or blank yields an empty list.
    pub fn int_list<T: std::str::FromStr>(&self, key: &str) -> Result<Vec<T>, AttrError> {
        match self.get(key) {
            Some(raw) => raw
                .split_whitespace()
                .map(|item| parse_int(key, item))
                .collect(),
            None => Ok(Vec::new()),
        }
    }
}

impl FromIterator<(String, String)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

fn parse_int<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, AttrError> {
    raw.trim().parse::<T>().map_err(|_| AttrError::NotInteger {
        attribute: key.to_string(),
        value: raw.to_string(),
    })
}

/// XML Schema boolean lexical space.
fn parse_bool(key: &str, raw: &str) -> Result<bool, AttrError> {
    match raw.trim() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(AttrError::NotBoolean {
            attribute: key.to_string(),
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> Attributes {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_get_absent_is_none() {
        let a = attrs(&[("begin", "3")]);
        assert_eq!(a.get("begin"), Some("3"));
        assert_eq!(a.get("end"), None);
        assert!(a.contains("begin"));
        assert_eq!(a.len(), 1);
    }

    #[test]
    fn test_required_int() {
        let a = attrs(&[("begin", "12"), ("end", "x")]);
        assert_eq!(a.required_int::<usize>("begin"), Ok(12));
        assert_eq!(
            a.required_int::<usize>("end"),
            Err(AttrError::NotInteger {
                attribute: "end".to_string(),
                value: "x".to_string()
            })
        );
        assert_eq!(
            a.required_int::<usize>("missing"),
            Err(AttrError::missing("missing"))
        );
    }

    #[test]
    fn test_negative_offsets_rejected_for_unsigned() {
        let a = attrs(&[("begin", "-1"), ("polarity", "-1")]);
        assert!(a.required_int::<usize>("begin").is_err());
        assert_eq!(a.optional_int::<i64>("polarity"), Ok(Some(-1)));
    }

    #[test]
    fn test_optional_float() {
        let a = attrs(&[("score", "0.75"), ("confidence", "high")]);
        assert_eq!(a.optional_float("score"), Ok(Some(0.75)));
        assert_eq!(a.optional_float("uncertainty"), Ok(None));
        assert!(matches!(
            a.optional_float("confidence"),
            Err(AttrError::NotFloat { .. })
        ));
    }

    #[test]
    fn test_optional_bool() {
        let a = attrs(&[("generic", "false"), ("conditional", "1"), ("x", "yes")]);
        assert_eq!(a.optional_bool("generic"), Ok(Some(false)));
        assert_eq!(a.optional_bool("conditional"), Ok(Some(true)));
        assert_eq!(a.optional_bool("absent"), Ok(None));
        assert!(matches!(
            a.optional_bool("x"),
            Err(AttrError::NotBoolean { .. })
        ));
    }

    #[test]
    fn test_int_list() {
        let a = attrs(&[("ids", " 501  502\n503 "), ("bad", "501 five")]);
        assert_eq!(a.int_list::<u64>("ids"), Ok(vec![501, 502, 503]));
        assert_eq!(a.int_list::<u64>("absent"), Ok(vec![]));
        assert_eq!(
            a.int_list::<u64>("bad"),
            Err(AttrError::NotInteger {
                attribute: "bad".to_string(),
                value: "five".to_string()
            })
        );
    }
}
