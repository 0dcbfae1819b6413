// src/gui/router.rs
use crate::config::options::DomainKind;
use super::pages::{self, DirectoryPage, Page};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::directory::REGIONS_PAGE,
    &pages::directory::INDUSTRIES_PAGE,
    &pages::directory::DATE_POSTED_PAGE,
    &pages::market::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

/// The directory page for a domain (the market page has none).
pub fn directory_page(kind: DomainKind) -> Option<&'static DirectoryPage> {
    match kind {
        DomainKind::Regions => Some(&pages::directory::REGIONS_PAGE),
        DomainKind::Industries => Some(&pages::directory::INDUSTRIES_PAGE),
        DomainKind::DatePosted => Some(&pages::directory::DATE_POSTED_PAGE),
    }
}
