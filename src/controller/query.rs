use crate::types::{Filter, Health, RepoRecord};

/// Active filter configuration. Every populated field must match.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    search: String,
    language: Option<String>,
    health: Option<Health>,
}

impl Query {
    pub fn apply(&mut self, filter: Filter) {
        match filter {
            Filter::Search(text) => self.search = text.trim().to_lowercase(),
            Filter::Language(language) => self.language = language,
            Filter::Health(health) => self.health = health,
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn health(&self) -> Option<Health> {
        self.health
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.language.is_none() && self.health.is_none()
    }

    pub fn matches(&self, record: &RepoRecord) -> bool {
        self.matches_search(record) && self.matches_language(record) && self.matches_health(record)
    }

    fn matches_search(&self, record: &RepoRecord) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let description = record.description.as_deref().unwrap_or("");
        record.name.to_lowercase().contains(&self.search)
            || description.to_lowercase().contains(&self.search)
    }

    fn matches_language(&self, record: &RepoRecord) -> bool {
        match &self.language {
            Some(language) => record.language.as_deref() == Some(language.as_str()),
            None => true,
        }
    }

    fn matches_health(&self, record: &RepoRecord) -> bool {
        self.health.map_or(true, |health| record.health == health)
    }
}
