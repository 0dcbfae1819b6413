// src/render.rs
//
// Presentational model for the results area, shared by the GUI table and
// the CLI printer. Widgets stay dumb: everything they show (summary lines,
// link targets, placeholder strings) is decided here.

use crate::core::url;
use crate::pipeline::{FacetChain, Listing, Selection};

/// Fixed empty-set message.
pub const NO_RESULTS_MSG: &str = "No Employers Shown At This Time";

/// Fixed placeholder wherever a listing has no link for a column.
pub const NO_LINK_MSG: &str = "No link available";

/// Closing note under the regions results table.
pub const RESULTS_FOOTER: &str =
    "If you are currently in an unstable or unsafe position financially and \
     you do not have a job through no fault of your own, it may be worth \
     checking to see if you qualify for unemployment in your state.";

#[derive(Clone, Debug, PartialEq)]
pub struct LinkView {
    pub href: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EntryView {
    pub name: String,
    /// Hyperlink target for the name itself (direct variants).
    pub href: Option<String>,
    /// General/contact page link (regions).
    pub contact: Option<LinkView>,
    /// Careers page link (regions).
    pub careers: Option<LinkView>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultsView {
    pub count: usize,
    /// Bound facet values, in chain order: (label, value).
    pub summary: Vec<(String, String)>,
    pub entries: Vec<EntryView>,
}

impl ResultsView {
    /// Build the view for a finished pipeline run. `listings` is assumed
    /// already filtered and name-sorted by the pipeline.
    pub fn build(chain: &FacetChain, sel: &Selection, listings: &[Listing]) -> Self {
        let summary = chain
            .facets
            .iter()
            .enumerate()
            .filter_map(|(i, facet)| sel.get(i).map(|v| (s!(facet.label), s!(v))))
            .collect();

        let entries = listings
            .iter()
            .map(|l| EntryView {
                name: l.name.clone(),
                href: l.link.as_deref().and_then(url::normalize),
                contact: link_view(l.contact.as_deref(), &l.name, "General/Contact Page"),
                careers: link_view(l.careers.as_deref(), &l.name, "Region Specific/Careers Page"),
            })
            .collect::<Vec<_>>();

        Self { count: listings.len(), summary, entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn link_view(raw: Option<&str>, name: &str, suffix: &str) -> Option<LinkView> {
    let href = url::normalize(raw?)?;
    Some(LinkView { href, label: format!("{name} {suffix}") })
}
