//! Combining remote results with the bundled document.
//!
//! Kept free of I/O: the provider gathers [`RemoteFields`] and hands them here.

use crate::domain::model::{Experience, PortfolioDocument, Project, Stats, TechnicalExpertise};

/// Whatever the backend managed to serve. Failed calls contribute empty values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RemoteFields {
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub technical_expertise: Vec<TechnicalExpertise>,
    pub stats: Stats,
}

/// Overlays `remote` on `base`.
///
/// A sequence replaces the base one only when it is non-empty. An empty remote
/// list is treated the same as a failed call, so "backend has no data yet" and
/// "backend is broken" both show the bundled entries.
/// Stats are merged key by key with remote values winning.
pub fn merge_fallback(base: PortfolioDocument, remote: RemoteFields) -> PortfolioDocument {
    let mut merged = base;

    if !remote.projects.is_empty() {
        merged.projects = remote.projects;
    }
    if !remote.experience.is_empty() {
        merged.experience = remote.experience;
    }
    if !remote.technical_expertise.is_empty() {
        merged.technical_expertise = remote.technical_expertise;
    }
    merged.stats = merge_stats(merged.stats, remote.stats);

    merged
}

pub fn merge_stats(mut base: Stats, remote: Stats) -> Stats {
    for (key, value) in remote {
        base.insert(key, value);
    }
    base
}
