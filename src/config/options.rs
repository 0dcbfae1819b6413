// src/config/options.rs
use std::path::PathBuf;

use super::consts::DATA_DIR;

/// Which directory page a dataset/selection belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DomainKind {
    Regions,
    Industries,
    DatePosted,
}

impl DomainKind {
    pub const ALL: [DomainKind; 3] =
        [DomainKind::Regions, DomainKind::Industries, DomainKind::DatePosted];
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    /// Where the JSON dataset files live (and get cached after a fetch).
    pub data_dir: PathBuf,
    /// Re-fetch every source even if a local copy exists.
    pub refresh: bool,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DATA_DIR),
            refresh: false,
        }
    }
}
