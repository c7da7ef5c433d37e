use clap::Parser;
use std::env;

use crate::cli::command::Command;
use crate::source::{SourceLocation, DEFAULT_UPSTREAM_URL};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Browse a repository health feed and proxy it with open CORS",
    long_about = "Serves the repository feed as { count, repos } for browser dashboards, or filters, sorts and pages it from the command line.\n\nWithout a subcommand the proxy server runs until Ctrl-C.",
    subcommand_required = false,
    arg_required_else_help = false
)]
pub struct Cli {
    #[arg(
        long,
        env = "REPO_DASHBOARD_SOURCE",
        default_value = DEFAULT_UPSTREAM_URL,
        value_name = "URL|PATH",
        help = "Where one-shot commands read the repos.json array from (http(s) URL or file path)"
    )]
    pub source: SourceLocation,

    #[arg(
        long = "upstream-url",
        env = "REPO_DASHBOARD_UPSTREAM_URL",
        default_value = DEFAULT_UPSTREAM_URL,
        value_name = "URL",
        help = "Upstream repos.json fetched by the proxy on every request"
    )]
    pub upstream_url: url::Url,

    #[arg(
        long = "api-listen",
        env = "REPO_DASHBOARD_API_LISTEN",
        value_name = "ADDR",
        default_value = "127.0.0.1:8787",
        help = "Proxy listen address (host:port)"
    )]
    pub api_listen: std::net::SocketAddr,

    #[arg(
        long = "timeout-secs",
        env = "REPO_DASHBOARD_TIMEOUT_SECS",
        value_name = "SECS",
        default_value_t = 10u64,
        help = "HTTP timeout for upstream requests"
    )]
    pub timeout_secs: u64,

    #[arg(
        long = "log-file",
        env = "REPO_DASHBOARD_LOG_FILE",
        value_name = "PATH",
        help = "Write logs to PATH (in addition to stderr)"
    )]
    pub log_file: Option<String>,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

pub fn parse() -> Cli {
    let dotenv_path = env::var("DOTENV_PATH").unwrap_or(".env".into());
    if dotenvy::from_filename(&dotenv_path).is_ok() {
        log::debug!("Loaded env from {}", dotenv_path);
    }
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Health, SortKey};

    #[test]
    fn defaults_point_at_public_feed() {
        let cli = Cli::try_parse_from(["repo-dashboard"]).unwrap();
        assert_eq!(cli.upstream_url.as_str(), DEFAULT_UPSTREAM_URL);
        assert!(matches!(cli.source, SourceLocation::Url(_)));
        assert_eq!(cli.api_listen.port(), 8787);
        assert!(cli.cmd.is_none());
    }

    #[test]
    fn list_flags_parse_into_typed_values() {
        let cli = Cli::try_parse_from([
            "repo-dashboard",
            "--source",
            "public/data/repos.json",
            "list",
            "--health",
            "red",
            "--sort",
            "issues_desc",
            "--page",
            "2",
        ])
        .unwrap();

        assert!(matches!(cli.source, SourceLocation::File(_)));
        let Some(Command::List(args)) = cli.cmd else {
            panic!("expected list command");
        };
        assert_eq!(args.health, Some(Health::Red));
        assert_eq!(args.sort, SortKey::IssuesDesc);
        assert_eq!(args.page, 2);
        assert_eq!(args.page_size, 12);
    }

    #[test]
    fn unknown_sort_key_is_rejected() {
        let err = Cli::try_parse_from(["repo-dashboard", "list", "--sort", "stars"]);
        assert!(err.is_err());
    }
}
