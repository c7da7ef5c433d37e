use std::fmt;

use serde::Serialize;

use crate::types::{Health, RepoRecord};

/// Counts over the whole collection, independent of any filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub green: usize,
    pub yellow: usize,
    pub red: usize,
    pub unknown: usize,
}

impl Stats {
    pub fn collect(records: &[RepoRecord]) -> Self {
        records.iter().fold(
            Stats {
                total: records.len(),
                ..Default::default()
            },
            |mut stats, record| {
                match record.health {
                    Health::Green => stats.green += 1,
                    Health::Yellow => stats.yellow += 1,
                    Health::Red => stats.red += 1,
                    Health::Unknown => stats.unknown += 1,
                }
                stats
            },
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Summary {
    Loading,
    Error(String),
    NoData,
    NoMatches,
    Showing { shown: usize, total: usize },
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Summary::Loading => write!(f, "Loading repositories…"),
            Summary::Error(message) => write!(f, "{}", message),
            Summary::NoData => write!(f, "No repositories found."),
            Summary::NoMatches => write!(f, "No repositories match the current filters."),
            Summary::Showing { shown, total } => {
                write!(f, "Showing {} of {} repositories.", shown, total)
            }
        }
    }
}
