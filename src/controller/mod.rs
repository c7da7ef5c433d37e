//! Repository list controller.
//!
//! Owns the loaded record set plus the filter, sort and page state. Every
//! derived output (`filtered`, `visible`, `stats`, `summary`) is recomputed
//! from the full set on demand, so filters and sorts compose in any order and
//! clearing a filter always gives the whole collection back.

mod query;
mod sort;
mod summary;


use serde::Serialize;
use serde_json::Value;

use crate::source::{RecordSource, SourceError};
use crate::types::{DashboardError, Filter, RepoRecord, SortKey};

pub use query::Query;
pub use sort::{compare, locale_cmp};
pub use summary::{Stats, Summary};

pub const DEFAULT_PAGE_SIZE: usize = 12;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListMode {
    Paginated { page_size: usize },
    Unpaged,
}

impl Default for ListMode {
    fn default() -> Self {
        ListMode::Paginated {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    NotLoaded,
    Loading,
    Ready,
    Failed(String),
}

/// Handed out by [`ListController::begin_load`]; only the most recent ticket
/// is accepted by [`ListController::finish_load`].
#[derive(Debug)]
#[must_use]
pub struct LoadTicket {
    generation: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub page: usize,
    pub page_count: usize,
    pub page_size: usize,
}

#[derive(Debug)]
pub struct ListController {
    records: Vec<RepoRecord>,
    languages: Vec<String>,
    state: LoadState,
    generation: u64,
    query: Query,
    sort: SortKey,
    page: usize,
    mode: ListMode,
}

impl ListController {
    pub fn new(mode: ListMode) -> Self {
        let mode = match mode {
            ListMode::Paginated { page_size } => ListMode::Paginated {
                page_size: page_size.max(1),
            },
            ListMode::Unpaged => ListMode::Unpaged,
        };
        Self {
            records: Vec::new(),
            languages: Vec::new(),
            state: LoadState::NotLoaded,
            generation: 0,
            query: Query::default(),
            sort: SortKey::default(),
            page: 1,
            mode,
        }
    }

    pub async fn load<S: RecordSource>(&mut self, source: &S) -> Result<(), DashboardError> {
        let ticket = self.begin_load()?;
        log::info!("📥 Loading repositories from {}", source.describe());
        let result = source.fetch().await;
        self.finish_load(ticket, result);
        Ok(())
    }

    /// Marks a load as outstanding and drops the current record set so
    /// nothing stale is shown while it is pending.
    pub fn begin_load(&mut self) -> Result<LoadTicket, DashboardError> {
        if self.state == LoadState::Loading {
            return Err(DashboardError::LoadInProgress);
        }
        self.generation += 1;
        self.state = LoadState::Loading;
        self.records.clear();
        self.languages.clear();
        Ok(LoadTicket {
            generation: self.generation,
        })
    }

    /// Applies a fetch outcome. Returns `false` if the ticket is stale.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Value>, SourceError>,
    ) -> bool {
        if ticket.generation != self.generation || self.state != LoadState::Loading {
            log::warn!("ignoring stale load result (ticket {})", ticket.generation);
            return false;
        }

        match result {
            Ok(values) => {
                self.records = RepoRecord::from_values(&values);
                self.languages = collect_languages(&self.records);
                self.state = LoadState::Ready;
                log::info!(
                    "📦 Loaded {} repositories ({} languages)",
                    self.records.len(),
                    self.languages.len()
                );
            }
            Err(err) => {
                log::error!("Failed to load repositories: {}", err);
                self.state = LoadState::Failed(load_failure_message(&err));
            }
        }
        self.page = 1;
        true
    }

    pub fn set_filter(&mut self, filter: Filter) {
        log::debug!("filter {} changed", filter.field());
        self.query.apply(filter);
        self.page = 1;
    }

    pub fn set_sort(&mut self, key: SortKey) {
        self.sort = key;
    }

    /// Out-of-range pages clamp into `[1, page_count]`. No-op when unpaged.
    pub fn set_page(&mut self, page: usize) {
        if let ListMode::Paginated { page_size } = self.mode {
            let count = page_count(self.filtered_count(), page_size);
            self.page = page.clamp(1, count.max(1));
        }
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page.saturating_add(1));
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn records(&self) -> &[RepoRecord] {
        &self.records
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort
    }

    pub fn mode(&self) -> ListMode {
        self.mode
    }

    /// Full set → filter → stable sort.
    pub fn filtered(&self) -> Vec<&RepoRecord> {
        let mut out: Vec<&RepoRecord> = self
            .records
            .iter()
            .filter(|record| self.query.matches(record))
            .collect();
        out.sort_by(|a, b| compare(a, b, self.sort));
        out
    }

    pub fn filtered_count(&self) -> usize {
        self.records
            .iter()
            .filter(|record| self.query.matches(record))
            .count()
    }

    pub fn visible(&self) -> Vec<&RepoRecord> {
        let filtered = self.filtered();
        match self.page_info() {
            Some(info) => filtered
                .into_iter()
                .skip((info.page - 1) * info.page_size)
                .take(info.page_size)
                .collect(),
            None => filtered,
        }
    }

    pub fn page_info(&self) -> Option<PageInfo> {
        match self.mode {
            ListMode::Paginated { page_size } => {
                let count = page_count(self.filtered_count(), page_size);
                Some(PageInfo {
                    page: self.page.clamp(1, count.max(1)),
                    page_count: count,
                    page_size,
                })
            }
            ListMode::Unpaged => None,
        }
    }

    pub fn stats(&self) -> Stats {
        Stats::collect(&self.records)
    }

    pub fn summary(&self) -> Summary {
        match &self.state {
            LoadState::NotLoaded | LoadState::Loading => Summary::Loading,
            LoadState::Failed(message) => Summary::Error(message.clone()),
            LoadState::Ready if self.records.is_empty() => Summary::NoData,
            LoadState::Ready => match self.filtered_count() {
                0 => Summary::NoMatches,
                shown => Summary::Showing {
                    shown,
                    total: self.records.len(),
                },
            },
        }
    }
}

impl Default for ListController {
    fn default() -> Self {
        Self::new(ListMode::default())
    }
}

pub fn page_count(items: usize, page_size: usize) -> usize {
    items.div_ceil(page_size.max(1))
}

fn collect_languages(records: &[RepoRecord]) -> Vec<String> {
    let mut languages: Vec<String> = records
        .iter()
        .filter_map(|record| record.language.clone())
        .filter(|language| !language.is_empty())
        .collect();
    languages.sort_by(|a, b| locale_cmp(a, b));
    languages.dedup();
    languages
}

fn load_failure_message(err: &SourceError) -> String {
    match err {
        SourceError::UnexpectedShape(_) => {
            "Error: repos.json is not in the expected format.".to_string()
        }
        other => format!("Error loading repo data: {}", other),
    }
}
