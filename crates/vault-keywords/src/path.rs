//! Keyword path normalization.
//!
//! A raw keyword such as `"  administratif / papier /passport "` becomes the
//! segment sequence `["administratif", "papier", "passport"]`:
//!
//! 1. Split on `/`
//! 2. Trim whitespace on each segment
//! 3. Drop empty segments, keeping order
//!
//! Two raw strings that normalize to the same segments are the same path.
//! A raw string with no segments left (`""`, `"///"`, `"  "`) is the empty
//! path and contributes nothing to the tree.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Separator between path segments.
pub const SEPARATOR: char = '/';

/// Split a raw keyword into trimmed, non-empty segments.
///
/// # Examples
///
/// ```
/// use vault_keywords::path::normalize;
///
/// assert_eq!(normalize("  a / b /c  "), vec!["a", "b", "c"]);
/// assert!(normalize("///").is_empty());
/// ```
pub fn normalize(raw: &str) -> Vec<String> {
    raw.split(SEPARATOR)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join segments with `/`.
///
/// Inverse of [`normalize`] for canonical segments: re-normalizing the joined
/// string yields the same segments.
pub fn join<S: AsRef<str>>(segments: &[S]) -> String {
    let mut joined = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            joined.push(SEPARATOR);
        }
        joined.push_str(segment.as_ref());
    }
    joined
}

/// Split a comma-separated keyword field into raw keywords.
///
/// Each entry is trimmed and empty entries are dropped. Entries are kept as
/// typed; slashes inside an entry are left for [`normalize`] to handle.
///
/// ```
/// use vault_keywords::path::parse_keyword_list;
///
/// assert_eq!(
///     parse_keyword_list("work/contract, admin ,, "),
///     vec!["work/contract", "admin"]
/// );
/// ```
pub fn parse_keyword_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join raw keywords back into the comma-separated form field.
pub fn format_keyword_list<S: AsRef<str>>(keywords: &[S]) -> String {
    keywords
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// KeywordPath
// ============================================================================

/// A normalized hierarchical keyword path.
///
/// The empty path (no segments) stands for the tree root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct KeywordPath {
    segments: Vec<String>,
}

impl KeywordPath {
    /// The empty path.
    pub fn root() -> Self {
        Self::default()
    }

    /// Normalizes a raw keyword string.
    pub fn parse(raw: &str) -> Self {
        Self {
            segments: normalize(raw),
        }
    }

    /// Builds a path from segments, normalizing each one.
    ///
    /// Segments containing `/` are split further so the result is always
    /// canonical.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            segments: segments
                .into_iter()
                .flat_map(|segment| normalize(segment.as_ref()))
                .collect(),
        }
    }

    /// The segments, root first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` for the empty path.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The last segment, or `None` for the empty path.
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// `/`-joined canonical form.
    pub fn join(&self) -> String {
        join(&self.segments)
    }

    /// The path with one more segment appended.
    pub fn child(&self, segment: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.extend(normalize(segment));
        Self { segments }
    }

    /// The path without its last segment, or `None` for the empty path.
    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.segments.split_last()?;
        Some(Self {
            segments: rest.to_vec(),
        })
    }

    /// Every non-empty proper prefix, shortest first.
    ///
    /// `a/b/c` yields `a` then `a/b`.
    pub fn ancestors(&self) -> impl Iterator<Item = KeywordPath> + '_ {
        (1..self.segments.len()).map(|len| Self {
            segments: self.segments[..len].to_vec(),
        })
    }

    /// Returns `true` when `prefix`'s segments are a (non-strict) prefix of
    /// this path. The empty path is a prefix of every path.
    pub fn starts_with(&self, prefix: &KeywordPath) -> bool {
        self.segments.starts_with(&prefix.segments)
    }
}

impl fmt::Display for KeywordPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join())
    }
}

impl FromStr for KeywordPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for KeywordPath {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for KeywordPath {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<KeywordPath> for String {
    fn from(path: KeywordPath) -> Self {
        path.join()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // normalize / join
    // -------------------------------------------------------------------------

    #[test]
    fn test_normalize_trims_segments() {
        assert_eq!(normalize("  a / b /c  "), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_normalize_only_slashes() {
        assert!(normalize("///").is_empty());
    }

    #[test]
    fn test_normalize_empty_and_blank() {
        assert!(normalize("").is_empty());
        assert!(normalize("   ").is_empty());
        assert!(normalize(" / \t / ").is_empty());
    }

    #[test]
    fn test_normalize_stray_slashes() {
        assert_eq!(normalize("/work//contract/"), vec!["work", "contract"]);
    }

    #[test]
    fn test_normalize_keeps_inner_spaces() {
        assert_eq!(
            normalize("administratif/carte grise"),
            vec!["administratif", "carte grise"]
        );
    }

    #[test]
    fn test_join() {
        assert_eq!(join(&["a", "b", "c"]), "a/b/c");
        assert_eq!(join::<&str>(&[]), "");
        assert_eq!(join(&["solo"]), "solo");
    }

    #[test]
    fn test_join_normalize_idempotent() {
        let once = normalize(" x // y / z ");
        let twice = normalize(&join(&once));
        assert_eq!(once, twice);
    }

    // -------------------------------------------------------------------------
    // keyword list field
    // -------------------------------------------------------------------------

    #[test]
    fn test_parse_keyword_list() {
        assert_eq!(
            parse_keyword_list(" administratif, papier/passport ,,identité "),
            vec!["administratif", "papier/passport", "identité"]
        );
        assert!(parse_keyword_list("").is_empty());
        assert!(parse_keyword_list(" , ,").is_empty());
    }

    #[test]
    fn test_format_keyword_list() {
        assert_eq!(format_keyword_list(&["a/b", "c"]), "a/b, c");
        assert_eq!(format_keyword_list::<&str>(&[]), "");
    }

    // -------------------------------------------------------------------------
    // KeywordPath
    // -------------------------------------------------------------------------

    #[test]
    fn test_keyword_path_equivalence() {
        assert_eq!(KeywordPath::parse("work/contract"), KeywordPath::parse(" work / contract/"));
    }

    #[test]
    fn test_keyword_path_root() {
        let root = KeywordPath::root();
        assert!(root.is_empty());
        assert_eq!(root.depth(), 0);
        assert_eq!(root.to_string(), "");
        assert!(root.parent().is_none());
        assert_eq!(KeywordPath::parse("///"), root);
    }

    #[test]
    fn test_keyword_path_parent_and_child() {
        let path = KeywordPath::parse("a/b/c");
        assert_eq!(path.parent().unwrap(), KeywordPath::parse("a/b"));
        assert_eq!(KeywordPath::parse("a").parent().unwrap(), KeywordPath::root());
        assert_eq!(KeywordPath::parse("a/b").child(" c "), path);
        assert_eq!(path.last(), Some("c"));
    }

    #[test]
    fn test_keyword_path_ancestors() {
        let path = KeywordPath::parse("a/b/c");
        let ancestors: Vec<String> = path.ancestors().map(|p| p.join()).collect();
        assert_eq!(ancestors, vec!["a", "a/b"]);
        assert_eq!(KeywordPath::parse("a").ancestors().count(), 0);
    }

    #[test]
    fn test_keyword_path_starts_with() {
        let path = KeywordPath::parse("work/contract");
        assert!(path.starts_with(&KeywordPath::parse("work")));
        assert!(path.starts_with(&KeywordPath::parse("work/contract")));
        assert!(path.starts_with(&KeywordPath::root()));
        assert!(!path.starts_with(&KeywordPath::parse("wo")));
        assert!(!path.starts_with(&KeywordPath::parse("work/contract/x")));
    }

    #[test]
    fn test_keyword_path_from_segments_splits() {
        let path = KeywordPath::from_segments(["a/b", " ", "c"]);
        assert_eq!(path.segments(), &["a", "b", "c"]);
    }

    #[test]
    fn test_keyword_path_from_str() {
        let path: KeywordPath = " admin / id ".parse().unwrap();
        assert_eq!(path.join(), "admin/id");
    }

    #[test]
    fn test_keyword_path_serde_as_string() {
        let path = KeywordPath::parse("a / b");
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "\"a/b\"");
        let back: KeywordPath = serde_json::from_str("\" a//b \"").unwrap();
        assert_eq!(back, path);
    }
}
