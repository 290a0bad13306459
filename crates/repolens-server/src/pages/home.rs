// File: src/pages/home.rs
// Purpose: Home listing page

use maud::{html, Markup};

use super::{layout, PageProps};
use crate::{repos, routes};

pub(super) fn render(_props: &PageProps) -> Markup {
    layout(
        "Repositories",
        html! {
            h1 { "Repositories" }
            ul class="repo-list" {
                @for repo in repos::REPOS.iter() {
                    li {
                        a href=(routes::detail_url(&repo.name)) { (repo.name) }
                        " "
                        span class="language" { (repo.language) }
                        " "
                        span class="stars" { "★ " (repo.stars) }
                        p { (repo.description) }
                    }
                }
            }
        },
    )
}
