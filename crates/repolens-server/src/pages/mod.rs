// File: src/pages/mod.rs
// Purpose: Page registry and shared page chrome

mod about;
mod home;
mod not_found;
mod repo_details;

use std::collections::HashMap;

use maud::{html, Markup, DOCTYPE};
use repolens_router::Params;

// Page-registry keys. The route table refers to pages by these; it never
// owns a page definition.
pub const HOME: &str = "home";
pub const REPO_DETAILS: &str = "repo-details";
pub const ABOUT: &str = "about";
pub const NOT_FOUND: &str = "not-found";

/// Inputs a page receives: the parameters its route chose to forward.
#[derive(Debug, Clone, Default)]
pub struct PageProps {
    params: Params,
}

impl PageProps {
    pub fn new(params: Params) -> Self {
        Self { params }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }
}

type PageFn = fn(&PageProps) -> Markup;

/// Owns the page definitions the route table points at.
pub struct PageRegistry {
    pages: HashMap<&'static str, PageFn>,
}

impl PageRegistry {
    /// Registers the four application pages under their keys.
    pub fn with_defaults() -> Self {
        let mut pages: HashMap<&'static str, PageFn> = HashMap::new();
        pages.insert(HOME, home::render);
        pages.insert(REPO_DETAILS, repo_details::render);
        pages.insert(ABOUT, about::render);
        pages.insert(NOT_FOUND, not_found::render);
        Self { pages }
    }

    pub fn contains(&self, target: &str) -> bool {
        self.pages.contains_key(target)
    }

    /// Renders the page registered under `target`, or `None` for an
    /// unknown key.
    pub fn render(&self, target: &str, props: &PageProps) -> Option<Markup> {
        self.pages.get(target).map(|page| page(props))
    }
}

/// Shared chrome: document shell plus the site navigation.
pub(crate) fn layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                title { (title) " · RepoLens" }
            }
            body {
                nav {
                    a href=(crate::routes::home_url()) { "Home" }
                    " | "
                    a href=(crate::routes::about_url()) { "About" }
                }
                main { (content) }
            }
        }
    }
}
