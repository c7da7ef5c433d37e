use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::DashboardError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    UpdatedDesc,
    UpdatedAsc,
    NameAsc,
    NameDesc,
    IssuesDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::UpdatedDesc,
        SortKey::UpdatedAsc,
        SortKey::NameAsc,
        SortKey::NameDesc,
        SortKey::IssuesDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::UpdatedDesc => "updated_desc",
            SortKey::UpdatedAsc => "updated_asc",
            SortKey::NameAsc => "name_asc",
            SortKey::NameDesc => "name_desc",
            SortKey::IssuesDesc => "issues_desc",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| DashboardError::UnknownSortKey(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_control_value() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
        }
    }

    #[test]
    fn rejects_unknown_key() {
        assert!(matches!(
            "stars_desc".parse::<SortKey>(),
            Err(DashboardError::UnknownSortKey(_))
        ));
    }

    #[test]
    fn default_is_most_recent_first() {
        assert_eq!(SortKey::default(), SortKey::UpdatedDesc);
    }
}
