mod dashboard_error;
mod filter;
mod health;
mod repo_record;
mod sort_key;

pub use dashboard_error::DashboardError;
pub use filter::{Filter, FilterField};
pub use health::Health;
pub use repo_record::{parse_timestamp, RepoRecord};
pub use sort_key::SortKey;
