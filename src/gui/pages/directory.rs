// src/gui/pages/directory.rs
//
// The three directory tabs share one implementation: a facet cascade over
// the page's chain, then the results area. The original site carried a
// near-identical copy of this flow per page; here a page is just a static
// description and the generic components do the work.

use eframe::egui;

use crate::config::options::DomainKind;
use crate::gui::{app::App, components};
use crate::pipeline::{self, FacetChain};

use super::Page;

/// How the final result set is presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultsLayout {
    /// Two-column link table (contact page / careers page) plus the
    /// closing footer note. Regions.
    LinkTable,
    /// Simple card list; the name itself is the link. Industries, dates.
    Cards,
}

pub struct DirectoryPage {
    pub kind: DomainKind,
    pub title: &'static str,
    pub chain: &'static FacetChain,
    pub layout: ResultsLayout,
}

pub static REGIONS_PAGE: DirectoryPage = DirectoryPage {
    kind: DomainKind::Regions,
    title: "Regions",
    chain: &pipeline::REGIONS,
    layout: ResultsLayout::LinkTable,
};

pub static INDUSTRIES_PAGE: DirectoryPage = DirectoryPage {
    kind: DomainKind::Industries,
    title: "Industries",
    chain: &pipeline::INDUSTRIES,
    layout: ResultsLayout::Cards,
};

pub static DATE_POSTED_PAGE: DirectoryPage = DirectoryPage {
    kind: DomainKind::DatePosted,
    title: "Date Posted",
    chain: &pipeline::DATE_POSTED,
    layout: ResultsLayout::Cards,
};

impl Page for DirectoryPage {
    fn title(&self) -> &'static str { self.title }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        components::facet_bar::draw(ui, app, self);
        ui.separator();
        components::results_area::draw(ui, app, self);
    }
}
