// src/gui/router.rs
use crate::config::options::PageKind::{self, *};
use super::pages::{self, Page};

/// Navigation order.
pub static PAGES: &[&'static dyn Page] = &[
    &pages::home::PAGE,
    &pages::extract::PAGE,
    &pages::analysis::PAGE,
    &pages::visualize::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn page_for(kind: PageKind) -> &'static dyn Page {
    match kind {
        Home      => &pages::home::PAGE,
        Extract   => &pages::extract::PAGE,
        Analysis  => &pages::analysis::PAGE,
        Visualize => &pages::visualize::PAGE,
    }
}

pub fn index_of(kind: PageKind) -> usize {
    PAGES.iter().position(|p| p.kind() == kind).unwrap_or(0)
}
