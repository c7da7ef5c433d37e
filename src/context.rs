use std::{net::SocketAddr, path::PathBuf, time::Duration};

use url::Url;

use crate::source::SourceLocation;

/// Runtime settings resolved from flags, env and `.env`.
#[derive(Clone, Debug)]
pub struct Context {
    pub source: SourceLocation,
    pub upstream_url: Url,
    pub api_listen: SocketAddr,
    pub timeout: Duration,
    pub log_file: Option<PathBuf>,
}

impl Context {
    pub fn from_cli(cli: &crate::cli::Cli) -> Self {
        Self {
            source: cli.source.clone(),
            upstream_url: cli.upstream_url.clone(),
            api_listen: cli.api_listen,
            timeout: Duration::from_secs(cli.timeout_secs.max(1)),
            log_file: cli.log_file.as_ref().map(PathBuf::from),
        }
    }
}
