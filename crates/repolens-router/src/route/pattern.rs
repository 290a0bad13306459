//! Pattern segment classification.
//!
//! A route pattern like `/RepoDetails/:id` is a sequence of segments, each
//! of which is literal text, a named parameter, or a wildcard. Parsing a
//! segment never fails; structural rules (non-empty parameter names, the
//! wildcard sitting at the end) are enforced when the table is built.

/// One segment of a route pattern.
///
/// # Examples
///
/// ```
/// use repolens_router::route::pattern::{classify_segment, Segment};
///
/// assert!(matches!(classify_segment("AboutUs"), Segment::Static(_)));
/// assert!(matches!(classify_segment(":id"), Segment::Param(_)));
/// assert!(matches!(classify_segment("*rest"), Segment::Wildcard(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text that must match the path segment exactly.
    Static(String),
    /// Named parameter capturing a single path segment: `:id`.
    Param(String),
    /// Wildcard capturing the entire remaining path, slashes included: `*rest`.
    Wildcard(String),
}

impl Segment {
    /// Returns the parameter name for `Param` and `Wildcard` segments.
    pub fn param_name(&self) -> Option<&str> {
        match self {
            Segment::Static(_) => None,
            Segment::Param(name) | Segment::Wildcard(name) => Some(name),
        }
    }
}

/// Classifies a single pattern segment.
///
/// `:name` is a parameter, `*name` a wildcard, anything else literal text.
pub fn classify_segment(segment: &str) -> Segment {
    if let Some(name) = segment.strip_prefix(':') {
        Segment::Param(name.to_string())
    } else if let Some(name) = segment.strip_prefix('*') {
        Segment::Wildcard(name.to_string())
    } else {
        Segment::Static(segment.to_string())
    }
}

/// Parses a normalized pattern into its segments.
///
/// The root pattern `/` yields an empty segment list.
///
/// # Examples
///
/// ```
/// use repolens_router::route::pattern::{parse_pattern, Segment};
///
/// let segments = parse_pattern("/RepoDetails/:id");
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[1], Segment::Param("id".to_string()));
///
/// assert!(parse_pattern("/").is_empty());
/// ```
pub fn parse_pattern(pattern: &str) -> Vec<Segment> {
    pattern
        .split('/')
        .filter(|s| !s.is_empty())
        .map(classify_segment)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_static() {
        assert_eq!(
            classify_segment("AboutUs"),
            Segment::Static("AboutUs".to_string())
        );
    }

    #[test]
    fn classify_param() {
        assert_eq!(classify_segment(":id"), Segment::Param("id".to_string()));
    }

    #[test]
    fn classify_wildcard() {
        assert_eq!(
            classify_segment("*rest"),
            Segment::Wildcard("rest".to_string())
        );
    }

    #[test]
    fn classify_empty_names_are_preserved_for_validation() {
        assert_eq!(classify_segment(":"), Segment::Param(String::new()));
        assert_eq!(classify_segment("*"), Segment::Wildcard(String::new()));
    }

    #[test]
    fn parse_root() {
        assert!(parse_pattern("/").is_empty());
    }

    #[test]
    fn parse_mixed() {
        let segments = parse_pattern("/RepoDetails/:id");
        assert_eq!(
            segments,
            vec![
                Segment::Static("RepoDetails".to_string()),
                Segment::Param("id".to_string()),
            ]
        );
    }

    #[test]
    fn param_name_accessor() {
        assert_eq!(classify_segment(":id").param_name(), Some("id"));
        assert_eq!(classify_segment("*rest").param_name(), Some("rest"));
        assert_eq!(classify_segment("AboutUs").param_name(), None);
    }
}
