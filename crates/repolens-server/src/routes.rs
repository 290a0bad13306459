// File: src/routes.rs
// Purpose: The application's route table

use once_cell::sync::Lazy;
use repolens_router::{Route, RouteTable};

use crate::pages;

/// The route table, built once at startup and immutable afterwards.
///
/// Four routes: the home listing, the parameterized detail page (its `id`
/// segment is forwarded to the page as an input), the about page, and the
/// wildcard fallback rendering the not-found page. The table is statically
/// known, so an invariant violation here is a programming error caught by
/// `table_builds` below.
pub static TABLE: Lazy<RouteTable> = Lazy::new(|| {
    RouteTable::builder()
        .route(Route::new("/", "home", pages::HOME))
        .route(
            Route::new("/RepoDetails/:id", "repo-details", pages::REPO_DETAILS)
                .with_forwarded_params(),
        )
        .route(Route::new("/AboutUs", "about", pages::ABOUT))
        .route(Route::fallback("not-found", pages::NOT_FOUND))
        .build()
        .expect("route table is statically valid")
});

/// App path of the home page.
pub fn home_url() -> String {
    TABLE.url_for("home", &[]).unwrap_or_else(|| "/".to_string())
}

/// App path of the about page.
pub fn about_url() -> String {
    TABLE
        .url_for("about", &[])
        .unwrap_or_else(|| "/AboutUs".to_string())
}

/// App path of the detail page for a repository id.
pub fn detail_url(id: &str) -> String {
    let encoded = urlencoding::encode(id);
    TABLE
        .url_for("repo-details", &[("id", encoded.as_ref())])
        .unwrap_or_else(|| format!("/RepoDetails/{encoded}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn table_builds() {
        assert_eq!(TABLE.len(), 4);
    }

    #[test]
    fn route_names_are_unique() {
        let mut names: Vec<&str> = TABLE.routes().map(|route| route.name()).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn root_resolves_to_home() {
        let m = TABLE.resolve("/");
        assert_eq!(m.route().name(), "home");
        assert_eq!(m.route().target(), pages::HOME);
    }

    #[test]
    fn detail_path_forwards_the_id() {
        let m = TABLE.resolve("/RepoDetails/serde");
        assert_eq!(m.route().target(), pages::REPO_DETAILS);
        assert_eq!(m.props().get("id"), Some("serde"));
    }

    #[rstest]
    #[case("/AboutUs")]
    #[case("/AboutUs/")]
    #[case("/AboutUs//")]
    fn about_resolves_regardless_of_trailing_slash(#[case] path: &str) {
        let m = TABLE.resolve(path);
        assert_eq!(m.route().target(), pages::ABOUT);
        assert!(!m.is_fallback());
    }

    #[rstest]
    #[case("/missing")]
    #[case("/RepoDetails")]
    #[case("/RepoDetails/serde/extra")]
    #[case("/AboutUs/team")]
    #[case("/a/b/c")]
    fn unmatched_paths_fall_back(#[case] path: &str) {
        let m = TABLE.resolve(path);
        assert_eq!(m.route().target(), pages::NOT_FOUND);
        assert!(m.is_fallback());
    }

    #[test]
    fn only_the_detail_route_forwards_params() {
        for route in TABLE.routes() {
            assert_eq!(
                route.forwards_params(),
                route.name() == "repo-details",
                "route {}",
                route.name()
            );
        }
    }

    #[test]
    fn navigation_urls() {
        assert_eq!(home_url(), "/");
        assert_eq!(about_url(), "/AboutUs");
        assert_eq!(detail_url("tokio"), "/RepoDetails/tokio");
    }

    #[test]
    fn detail_url_percent_encodes_the_id() {
        assert_eq!(detail_url("hello world"), "/RepoDetails/hello%20world");
    }
}
