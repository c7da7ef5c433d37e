//! Maps controller output to display cards. No filtering or sorting happens
//! here; this is the thin layer between derived state and a terminal or JSON
//! consumer.

mod time;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::controller::{ListController, LoadState, PageInfo, Stats};
use crate::types::RepoRecord;

pub use time::relative_time;

pub const EMPTY_LIST_MESSAGE: &str = "No repositories match the current filters.";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Card {
    pub title: String,
    pub link: String,
    pub health_class: String,
    pub health_label: &'static str,
    pub language: Option<String>,
    pub issues_badge: Option<String>,
    pub description: Option<String>,
    pub updated: String,
    pub full_name: String,
    pub default_branch: Option<String>,
}

impl Card {
    pub fn from_record(record: &RepoRecord, now: DateTime<Utc>) -> Self {
        Self {
            title: record.display_name().to_string(),
            link: record.url.clone().unwrap_or_default(),
            health_class: format!("badge-health-{}", record.health),
            health_label: record.health.label(),
            language: record.language.clone(),
            issues_badge: issues_badge(record.open_issues),
            description: record.description.clone().filter(|d| !d.is_empty()),
            updated: format!("Updated {}", relative_time(record.updated, now)),
            full_name: record.full_name.clone().unwrap_or_default(),
            default_branch: record.default_branch.clone(),
        }
    }
}

/// Everything a frontend needs to draw one frame.
#[derive(Clone, Debug, Serialize)]
pub struct RenderPlan {
    pub summary: String,
    pub stats: Stats,
    pub languages: Vec<String>,
    pub page: Option<PageInfo>,
    pub empty_message: Option<&'static str>,
    pub cards: Vec<Card>,
}

impl RenderPlan {
    pub fn build(controller: &ListController, now: DateTime<Utc>) -> Self {
        let cards: Vec<Card> = controller
            .visible()
            .into_iter()
            .map(|record| Card::from_record(record, now))
            .collect();

        let empty_message = match controller.state() {
            LoadState::Ready if cards.is_empty() => Some(EMPTY_LIST_MESSAGE),
            _ => None,
        };

        Self {
            summary: controller.summary().to_string(),
            stats: controller.stats(),
            languages: controller.languages().to_vec(),
            page: controller.page_info(),
            empty_message,
            cards,
        }
    }
}

impl fmt::Display for RenderPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.summary)?;
        writeln!(
            f,
            "total {} | green {} | yellow {} | red {} | unknown {}",
            self.stats.total, self.stats.green, self.stats.yellow, self.stats.red, self.stats.unknown
        )?;

        if let Some(message) = self.empty_message {
            writeln!(f)?;
            writeln!(f, "{}", message)?;
        }

        for card in &self.cards {
            writeln!(f)?;
            write!(f, "{}", card)?;
        }

        if let Some(page) = self.page.filter(|p| p.page_count > 1) {
            writeln!(f)?;
            writeln!(f, "Page {} of {}", page.page, page.page_count)?;
        }
        Ok(())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.health_label, self.title)?;
        let badges: Vec<&str> = self
            .language
            .as_deref()
            .into_iter()
            .chain(self.issues_badge.as_deref())
            .collect();
        if !badges.is_empty() {
            write!(f, " ({})", badges.join(", "))?;
        }
        writeln!(f)?;

        if let Some(description) = &self.description {
            writeln!(f, "    {}", description)?;
        }
        if self.full_name.is_empty() {
            writeln!(f, "    {}", self.updated)?;
        } else {
            writeln!(f, "    {} | {}", self.updated, self.full_name)?;
        }
        if !self.link.is_empty() {
            writeln!(f, "    {}", self.link)?;
        }
        Ok(())
    }
}

fn issues_badge(open_issues: u64) -> Option<String> {
    match open_issues {
        0 => None,
        1 => Some("1 open issue".to_string()),
        n => Some(format!("{} open issues", n)),
    }
}
