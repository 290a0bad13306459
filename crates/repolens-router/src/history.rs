//! Web history mode: the deployment base path.
//!
//! A front-end deployed under `/app` sees browser paths like
//! `/app/RepoDetails/42`; the route table only knows app paths like
//! `/RepoDetails/42`. [`History`] holds the normalized base and maps one to
//! the other.

use std::borrow::Cow;

use crate::path::normalize;

/// History-mode configuration: a normalized base path.
///
/// # Examples
///
/// ```
/// use repolens_router::History;
///
/// let history = History::web(Some("/app/"));
/// assert_eq!(history.base(), "/app");
/// assert_eq!(history.strip_base("/app/AboutUs").as_deref(), Some("/AboutUs"));
/// assert_eq!(history.strip_base("/app").as_deref(), Some("/"));
/// assert_eq!(history.strip_base("/elsewhere"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    base: String,
}

impl History {
    /// Creates web history with the given base path.
    ///
    /// `None`, an empty string, or `/` all mean "deployed at the root".
    /// The base is normalized like any other path, so `/app/` and `/app`
    /// are the same base.
    pub fn web(base: Option<&str>) -> Self {
        let base = match base.map(str::trim) {
            Some(b) if !b.is_empty() => normalize(b).into_owned(),
            _ => "/".to_string(),
        };
        Self { base }
    }

    /// The normalized base path (`/` when deployed at the root).
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Maps a browser path to an app path by removing the base prefix.
    ///
    /// Returns `None` when the path lies outside the base. Matching is
    /// segment-aware: with base `/app`, the path `/apple` is outside.
    pub fn strip_base<'p>(&self, path: &'p str) -> Option<Cow<'p, str>> {
        let normalized = normalize(path);
        if self.base == "/" {
            return Some(normalized);
        }
        match normalized {
            Cow::Borrowed(p) => strip(p, &self.base).map(Cow::Borrowed),
            Cow::Owned(p) => strip(&p, &self.base).map(|s| Cow::Owned(s.to_string())),
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::web(None)
    }
}

fn strip<'a>(path: &'a str, base: &str) -> Option<&'a str> {
    let rest = path.strip_prefix(base)?;
    if rest.is_empty() {
        Some("/")
    } else if rest.starts_with('/') {
        Some(rest)
    } else {
        // `/apple` under base `/app`: prefix matched mid-segment
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_base_is_identity() {
        let history = History::web(None);
        assert_eq!(history.base(), "/");
        assert_eq!(history.strip_base("/AboutUs").as_deref(), Some("/AboutUs"));
        assert_eq!(history.strip_base("/").as_deref(), Some("/"));
    }

    #[test]
    fn empty_and_slash_bases_mean_root() {
        assert_eq!(History::web(Some("")).base(), "/");
        assert_eq!(History::web(Some("  ")).base(), "/");
        assert_eq!(History::web(Some("/")).base(), "/");
    }

    #[test]
    fn base_is_normalized() {
        assert_eq!(History::web(Some("/app/")).base(), "/app");
        assert_eq!(History::web(Some("app")).base(), "/app");
    }

    #[test]
    fn strips_base_prefix() {
        let history = History::web(Some("/app"));
        assert_eq!(
            history.strip_base("/app/RepoDetails/42").as_deref(),
            Some("/RepoDetails/42")
        );
        assert_eq!(history.strip_base("/app").as_deref(), Some("/"));
        assert_eq!(history.strip_base("/app/").as_deref(), Some("/"));
    }

    #[test]
    fn rejects_paths_outside_base() {
        let history = History::web(Some("/app"));
        assert_eq!(history.strip_base("/other"), None);
        assert_eq!(history.strip_base("/apple"), None);
        assert_eq!(history.strip_base("/"), None);
    }

    #[test]
    fn strip_base_normalizes_first() {
        let history = History::web(Some("/app"));
        assert_eq!(
            history.strip_base("/app//AboutUs/").as_deref(),
            Some("/AboutUs")
        );
    }
}
