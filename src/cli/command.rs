use clap::{Args, Subcommand};

use crate::controller::DEFAULT_PAGE_SIZE;
use crate::types::{Health, SortKey};

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    #[command(
        about = "List repositories",
        long_about = "Load the feed once, then filter by search text, language and health, sort, and print one page of repository cards."
    )]
    List(ListArgs),
    #[command(
        about = "List the languages present in the feed",
        long_about = "Print the distinct, non-empty languages found in the feed, in the order a language picker would show them."
    )]
    Languages(OutputArgs),
    #[command(
        about = "Show health counts",
        long_about = "Print total and per-health repository counts for the whole feed. Filters never affect these numbers."
    )]
    Stats(OutputArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    #[arg(
        long,
        value_name = "TEXT",
        help = "Case-insensitive match against name or description"
    )]
    pub search: Option<String>,

    #[arg(long, value_name = "LANG", help = "Only repositories in this language")]
    pub language: Option<String>,

    #[arg(
        long,
        value_name = "HEALTH",
        help = "Only repositories with this health (green, yellow, red, unknown)"
    )]
    pub health: Option<Health>,

    #[arg(
        long,
        value_name = "KEY",
        default_value = "updated_desc",
        help = "updated_desc, updated_asc, name_asc, name_desc or issues_desc"
    )]
    pub sort: SortKey,

    #[arg(
        long,
        value_name = "N",
        default_value_t = 1usize,
        help = "Page to show; out-of-range values clamp"
    )]
    pub page: usize,

    #[arg(
        long = "page-size",
        value_name = "SIZE",
        default_value_t = DEFAULT_PAGE_SIZE,
        help = "Repositories per page"
    )]
    pub page_size: usize,

    #[arg(
        long,
        default_value_t = false,
        help = "Show every match instead of a single page"
    )]
    pub all: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    #[arg(long, default_value_t = false, help = "Print JSON instead of text")]
    pub json: bool,
}
