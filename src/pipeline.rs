// src/pipeline.rs
//
// The cascading filter pipeline. One parameterized implementation serves
// all three directory pages; each page contributes only a static chain
// description (ordered facet fields + result shape).
//
// Every stage is the same move: filter the collection by the facets bound
// so far (exact, case-sensitive string equality), project the next facet
// field, deduplicate, sort ascending. The final stage filters on the full
// chain, requires a present employer name, flattens nested employer lists
// one level (regions), and sorts by name.
//
// All functions here are pure over `&[Record]` + `&Selection`: no shared
// intermediates, safe to re-run on every frontend change event.

use std::collections::BTreeSet;

use crate::error::Error;
use crate::record::Record;

/// One dropdown in a chain.
#[derive(Clone, Copy, Debug)]
pub struct Facet {
    /// Field name in the dataset records.
    pub field: &'static str,
    /// Short label for summaries ("State:", "Scale:").
    pub label: &'static str,
    /// Placeholder text for the unselected control.
    pub placeholder: &'static str,
    /// Fixed option list instead of a derived one. Order is kept verbatim:
    /// the date ranges are deliberately not sorted ("Last 14 Days" would
    /// sort first).
    pub fixed: Option<&'static [&'static str]>,
}

/// How matching records become result listings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultShape {
    /// The record itself is the listing.
    Direct,
    /// Each record contributes its nested `Employers` list
    /// (or itself, when the list is absent and it carries a name).
    FlattenEmployers,
}

/// Static description of one directory page's facet cascade.
#[derive(Debug)]
pub struct FacetChain {
    pub facets: &'static [Facet],
    pub shape: ResultShape,
}

pub static REGIONS: FacetChain = FacetChain {
    facets: &[
        Facet { field: "State", label: "State", placeholder: "State/Territory", fixed: None },
        Facet { field: "City_Town_Other", label: "City/Town", placeholder: "City/Town/Other", fixed: None },
        Facet { field: "Scale", label: "Scale", placeholder: "Scale", fixed: None },
        Facet { field: "Type", label: "Type", placeholder: "Type", fixed: None },
    ],
    shape: ResultShape::FlattenEmployers,
};

pub static INDUSTRIES: FacetChain = FacetChain {
    facets: &[
        Facet { field: "Industry", label: "Industry", placeholder: "Industry", fixed: None },
        Facet { field: "Subindustry", label: "Subindustry", placeholder: "Subindustry", fixed: None },
        Facet { field: "Scale", label: "Scale", placeholder: "Scale", fixed: None },
        Facet { field: "Type", label: "Type", placeholder: "Type", fixed: None },
    ],
    shape: ResultShape::Direct,
};

pub static DATE_POSTED: FacetChain = FacetChain {
    facets: &[
        Facet {
            field: "DatePosted",
            label: "Date Posted",
            placeholder: "Date Posted",
            fixed: Some(&["Last 3 Days", "Last 7 Days", "Last 14 Days"]),
        },
        Facet { field: "Scale", label: "Scale", placeholder: "Scale", fixed: None },
        Facet { field: "Type", label: "Type", placeholder: "Type", fixed: None },
    ],
    shape: ResultShape::Direct,
};

/// One row of the final result set, normalized across dataset variants.
#[derive(Clone, Debug, PartialEq)]
pub struct Listing {
    pub name: String,
    /// Single catch-all link (direct variants: `EmployerLink`).
    pub link: Option<String>,
    /// General/contact page (regions employers).
    pub contact: Option<String>,
    /// Careers page (regions employers).
    pub careers: Option<String>,
}

/// The ordered facet values chosen so far. Slot *i* can only hold a value
/// while all earlier slots do; setting a slot clears everything deeper.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    slots: Vec<Option<String>>,
}

impl Selection {
    pub fn for_chain(chain: &FacetChain) -> Self {
        Self { slots: vec![None; chain.facets.len()] }
    }

    pub fn len(&self) -> usize { self.slots.len() }
    pub fn is_empty(&self) -> bool { self.slots.is_empty() }

    pub fn get(&self, stage: usize) -> Option<&str> {
        self.slots.get(stage).and_then(|v| v.as_deref())
    }

    /// Bind or clear slot `stage`. All deeper slots are cleared either way;
    /// their derived options and any displayed results are stale now.
    pub fn set(&mut self, stage: usize, value: Option<String>) {
        if stage >= self.slots.len() {
            return;
        }
        // An empty string is the placeholder row, i.e. "unselect".
        self.slots[stage] = value.filter(|v| !v.is_empty());
        for slot in self.slots.iter_mut().skip(stage + 1) {
            *slot = None;
        }
    }

    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
    }

    /// Number of leading bound slots.
    pub fn bound(&self) -> usize {
        self.slots.iter().take_while(|v| v.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        !self.slots.is_empty() && self.bound() == self.slots.len()
    }
}

impl FacetChain {
    pub fn len(&self) -> usize { self.facets.len() }

    /// Does `rec` match every bound facet among the first `upto` stages?
    /// Records missing a facet field never match (they silently drop out
    /// of deeper stages).
    fn matches_prefix(&self, rec: &Record, sel: &Selection, upto: usize) -> bool {
        self.facets
            .iter()
            .take(upto)
            .enumerate()
            .all(|(i, facet)| match sel.get(i) {
                Some(want) => rec.facet(facet.field) == Some(want),
                None => false,
            })
    }

    /// Candidate values for the control at `stage`: the distinct values of
    /// that facet among records matching stages `0..stage`, ascending.
    /// Empty output means the control stays disabled; it is never an error.
    pub fn options(&self, records: &[Record], sel: &Selection, stage: usize) -> Vec<String> {
        let Some(facet) = self.facets.get(stage) else {
            return Vec::new();
        };
        if let Some(fixed) = facet.fixed {
            return fixed.iter().map(|v| s!(*v)).collect();
        }
        if sel.bound() < stage {
            // Upstream not bound yet; nothing to derive from.
            return Vec::new();
        }

        let distinct: BTreeSet<&str> = records
            .iter()
            .filter(|r| self.matches_prefix(r, sel, stage))
            .filter_map(|r| r.facet(facet.field))
            .collect();

        distinct.into_iter().map(String::from).collect()
    }

    /// The final result set for a fully bound selection: all facets must
    /// match, the name must be present, nested employer lists flatten one
    /// level, and the output is ordered ascending by name.
    pub fn results(&self, records: &[Record], sel: &Selection) -> Result<Vec<Listing>, Error> {
        if sel.len() != self.facets.len() || !sel.is_complete() {
            return Err(Error::Filter(s!("selection is not fully bound")));
        }

        let matching = records
            .iter()
            .filter(|r| self.matches_prefix(r, sel, self.facets.len()));

        let mut out: Vec<Listing> = Vec::new();
        for rec in matching {
            match self.shape {
                ResultShape::Direct => {
                    if let Some(name) = rec.name() {
                        out.push(Listing {
                            name: s!(name),
                            link: rec.link.clone(),
                            contact: rec.contact.clone(),
                            careers: rec.careers.clone(),
                        });
                    }
                }
                ResultShape::FlattenEmployers => {
                    if rec.employers.is_empty() {
                        if let Some(name) = rec.name() {
                            out.push(Listing {
                                name: s!(name),
                                link: rec.link.clone(),
                                contact: rec.contact.clone(),
                                careers: rec.careers.clone(),
                            });
                        }
                    } else {
                        for emp in &rec.employers {
                            if emp.name.is_empty() {
                                continue;
                            }
                            out.push(Listing {
                                name: emp.name.clone(),
                                link: None,
                                contact: emp.contact.clone(),
                                careers: emp.careers.clone(),
                            });
                        }
                    }
                }
            }
        }

        // Stable, so equal names keep dataset order.
        out.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(out)
    }
}
