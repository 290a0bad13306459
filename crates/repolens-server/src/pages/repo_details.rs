// File: src/pages/repo_details.rs
// Purpose: Repository detail page; reads the forwarded `id` input

use maud::{html, Markup};

use super::{layout, PageProps};
use crate::{repos, routes};

pub(super) fn render(props: &PageProps) -> Markup {
    let id = props.get("id").unwrap_or_default();

    match repos::find(id) {
        Some(repo) => layout(
            &repo.name,
            html! {
                h1 { (repo.name) }
                dl {
                    dt { "Description" }
                    dd { (repo.description) }
                    dt { "Language" }
                    dd { (repo.language) }
                    dt { "Stars" }
                    dd { (repo.stars) }
                }
                p { a href=(routes::home_url()) { "Back to the list" } }
            },
        ),
        None => layout(
            "Unknown repository",
            html! {
                h1 { "Unknown repository" }
                p { "No repository named " code { (id) } " is in the index." }
                p { a href=(routes::home_url()) { "Back to the list" } }
            },
        ),
    }
}
