use std::{fmt, str::FromStr};

use super::{DashboardError, Health};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterField {
    Search,
    Language,
    Health,
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FilterField::Search => "search",
            FilterField::Language => "language",
            FilterField::Health => "health",
        };
        f.write_str(name)
    }
}

impl FromStr for FilterField {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "search" => Ok(FilterField::Search),
            "language" => Ok(FilterField::Language),
            "health" => Ok(FilterField::Health),
            other => Err(DashboardError::UnknownFilterField(other.to_string())),
        }
    }
}

/// One control's value. `None` and an empty search mean "match all".
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Filter {
    Search(String),
    Language(Option<String>),
    Health(Option<Health>),
}

impl Filter {
    /// Builds a filter from a raw control value, the way a select or text
    /// input reports it.
    pub fn parse(field: FilterField, value: &str) -> Result<Self, DashboardError> {
        let value = value.trim();
        Ok(match field {
            FilterField::Search => Filter::Search(value.to_string()),
            FilterField::Language if value.is_empty() => Filter::Language(None),
            FilterField::Language => Filter::Language(Some(value.to_string())),
            FilterField::Health if value.is_empty() => Filter::Health(None),
            FilterField::Health => Filter::Health(Some(value.parse()?)),
        })
    }

    pub fn field(&self) -> FilterField {
        match self {
            Filter::Search(_) => FilterField::Search,
            Filter::Language(_) => FilterField::Language,
            Filter::Health(_) => FilterField::Health,
        }
    }
}
