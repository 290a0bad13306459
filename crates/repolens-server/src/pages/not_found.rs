// File: src/pages/not_found.rs
// Purpose: Fallback page for paths no other route claims

use maud::{html, Markup};

use super::{layout, PageProps};
use crate::routes;

pub(super) fn render(_props: &PageProps) -> Markup {
    layout(
        "Page not found",
        html! {
            h1 { "404" }
            p { "There is nothing at this address." }
            p { a href=(routes::home_url()) { "Back to the repositories" } }
        },
    )
}
