// File: src/repos.rs
// Purpose: Embedded repository dataset backing the listing and detail pages

use once_cell::sync::Lazy;
use serde::Deserialize;

/// One repository in the index
#[derive(Debug, Clone, Deserialize)]
pub struct Repo {
    pub name: String,
    pub description: String,
    pub language: String,
    pub stars: u32,
}

static RAW: &str = include_str!("../data/repos.json");

/// The dataset ships inside the binary and is parsed once on first access.
pub static REPOS: Lazy<Vec<Repo>> =
    Lazy::new(|| serde_json::from_str(RAW).expect("embedded repository dataset is valid JSON"));

/// Looks up a repository by the id segment of the detail route.
pub fn find(id: &str) -> Option<&'static Repo> {
    REPOS.iter().find(|repo| repo.name == id)
}
