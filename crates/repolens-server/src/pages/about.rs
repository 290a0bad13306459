// File: src/pages/about.rs
// Purpose: Static informational page

use maud::{html, Markup};

use super::{layout, PageProps};
use crate::routes;

pub(super) fn render(_props: &PageProps) -> Markup {
    layout(
        "About",
        html! {
            h1 { "About RepoLens" }
            p {
                "RepoLens is a small site for browsing a curated index of "
                "repositories: a listing, a detail view per repository, and "
                "this page."
            }
            p {
                "Navigation is driven by a declarative route table; anything "
                "that is not in the table lands on the not-found page."
            }
            p { a href=(routes::home_url()) { "Browse the repositories" } }
        },
    )
}
