//! Substring substitution for text content and attribute values
//!
//! A [`Filter`] joins its keys into one alternation pattern. Keys are used as
//! pattern source without escaping, so a key such as `.` or `a+` matches as a
//! regular expression would. Matches that have no replacement entry are
//! removed from the output.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use regex::{Captures, Regex};
use std::borrow::Cow;
use tracing::debug;

/// A compiled substitution table
#[derive(Debug, Clone)]
pub struct Filter {
    replacements: IndexMap<String, String>,
    pattern: Option<Regex>,
}

impl Filter {
    /// Compiles a substitution table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFilterPattern`] when the joined keys do not
    /// form a valid pattern, e.g. a key of `(`.
    pub fn new<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let replacements: IndexMap<String, String> = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        let pattern = if replacements.is_empty() {
            None
        } else {
            let source = replacements
                .keys()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join("|");
            debug!(pattern = %source, "compiling filter");
            let compiled = Regex::new(&source).map_err(|source_err| Error::InvalidFilterPattern {
                pattern: source.clone(),
                source: source_err,
            })?;
            Some(compiled)
        };

        Ok(Self {
            replacements,
            pattern,
        })
    }

    /// Escapes `&`, `<` and `>` for element text
    ///
    /// # Errors
    ///
    /// Never fails in practice; the keys are fixed.
    pub fn xml_text() -> Result<Self> {
        Self::new([("&", "&amp;"), ("<", "&lt;"), (">", "&gt;")])
    }

    /// Escapes `&`, `<`, `>` and `"` for double-quoted attribute values
    ///
    /// # Errors
    ///
    /// Never fails in practice; the keys are fixed.
    pub fn xml_attribute() -> Result<Self> {
        Self::new([
            ("&", "&amp;"),
            ("<", "&lt;"),
            (">", "&gt;"),
            ("\"", "&quot;"),
        ])
    }

    pub fn replacements(&self) -> &IndexMap<String, String> {
        &self.replacements
    }

    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }

    /// Substitutes every match in `text`
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let Some(pattern) = &self.pattern else {
            return Cow::Borrowed(text);
        };
        pattern.replace_all(text, |caps: &Captures<'_>| {
            caps.get(0)
                .and_then(|m| self.replacements.get(m.as_str()))
                .cloned()
                .unwrap_or_default()
        })
    }
}

/// Applies `filter` to `text`; no filter leaves the text untouched.
pub fn escape<'a>(text: &'a str, filter: Option<&Filter>) -> Cow<'a, str> {
    match filter {
        Some(filter) => filter.apply(text),
        None => Cow::Borrowed(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_filter_is_identity() {
        assert_eq!(escape("a < b & c", None), "a < b & c");
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let filter = Filter::new(Vec::<(String, String)>::new()).unwrap();
        assert!(filter.is_empty());
        assert_eq!(filter.apply("<x>"), "<x>");
    }

    #[test]
    fn test_xml_text() {
        let filter = Filter::xml_text().unwrap();
        assert_eq!(
            escape("Tom & Jerry <3 >", Some(&filter)),
            "Tom &amp; Jerry &lt;3 &gt;"
        );
    }

    #[test]
    fn test_xml_attribute_quotes() {
        let filter = Filter::xml_attribute().unwrap();
        assert_eq!(filter.apply(r#"say "hi""#), "say &quot;hi&quot;");
    }

    #[test]
    fn test_multi_char_keys() {
        let filter = Filter::new([("foo", "bar"), ("ab", "X")]).unwrap();
        assert_eq!(filter.apply("foo-abc-foofoo"), "bar-Xc-barbar");
    }

    #[test]
    fn test_empty_replacement_deletes() {
        let filter = Filter::new([("x", "")]).unwrap();
        assert_eq!(filter.apply("axbxc"), "abc");
    }

    #[test]
    fn test_unmapped_match_deletes() {
        // `a+` matches "aaa", which has no entry of its own
        let filter = Filter::new([("a+", "A")]).unwrap();
        assert_eq!(filter.apply("baaad"), "bd");
    }

    #[test]
    fn test_metacharacter_key_is_pattern() {
        let filter = Filter::new([(".", "*")]).unwrap();
        // `.` matches every character, only the literal "." has a mapping
        assert_eq!(filter.apply("a.b"), "*");
    }

    #[test]
    fn test_invalid_pattern_fails_fast() {
        let result = Filter::new([("(", "paren")]);
        assert!(matches!(
            result,
            Err(Error::InvalidFilterPattern { ref pattern, .. }) if pattern == "("
        ));
    }

    #[test]
    fn test_borrowed_when_no_match() {
        let filter = Filter::xml_text().unwrap();
        assert!(matches!(filter.apply("plain"), Cow::Borrowed(_)));
    }
}
