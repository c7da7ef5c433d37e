use crate::{cli, context, rest, source::HttpSource, source::RecordSource};
use anyhow::{Context as AnyhowContext, Result};
use std::path::Path;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// The main application state.
/// Decoupled from CLI parsing so the server lifecycle can be tested.
pub struct App {
    config: context::Context,
    shutdown: CancellationToken,
}

impl App {
    /// Parses the CLI, attaches the log file and logs the resolved settings.
    pub fn from_cli() -> Result<(App, cli::Cli)> {
        let cli = crate::cli::parse();

        crate::tracing::set_log_file(cli.log_file.as_deref().map(Path::new));

        let ctx = context::Context::from_cli(&cli);
        log_startup_info(&ctx);

        Ok((App::new(ctx), cli))
    }

    fn new(config: context::Context) -> Self {
        Self {
            config,
            shutdown: CancellationToken::new(),
        }
    }

    /// Runs the proxy until Ctrl-C or until the server task dies.
    pub async fn run_daemon(&self) -> Result<()> {
        self.log_runtime_config();

        let upstream = HttpSource::new(self.config.upstream_url.clone(), self.config.timeout)
            .context("building upstream HTTP client")?;
        let mut rest_handle = self.spawn_rest_server(Arc::new(upstream));

        self.wait_for_shutdown(&mut rest_handle).await
    }

    // --- Helper Methods ---

    fn spawn_rest_server<S: RecordSource + Send + Sync + 'static>(
        &self,
        source: Arc<S>,
    ) -> JoinHandle<()> {
        let addr = self.config.api_listen;
        let token = self.shutdown.clone();

        tokio::spawn(async move {
            if let Err(e) = rest::serve(addr, source, token).await {
                log::error!("REST server failed: {:#}", e);
            }
        })
    }

    async fn wait_for_shutdown(&self, rest_task: &mut JoinHandle<()>) -> Result<()> {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => log::info!("🧨 Ctrl-C received, shutting down..."),
            _ = &mut *rest_task => log::error!("REST task exited unexpectedly"),
        }

        self.shutdown.cancel();

        // Awaiting a finished JoinHandle again panics
        if !rest_task.is_finished() {
            let _ = rest_task.await;
        }

        log::info!("✅ Shutdown complete");
        Ok(())
    }

    fn log_runtime_config(&self) {
        log::info!("⏱️ Upstream timeout: {}s", self.config.timeout.as_secs());
        if let Some(path) = self.config.log_file.as_deref() {
            log::info!("📝 Log file: {}", path.to_string_lossy());
        }
    }
}

fn log_startup_info(ctx: &context::Context) {
    log::info!("🚀 Starting repo-dashboard");
    log::info!("🔗 Upstream: {}", ctx.upstream_url);
    log::info!("📂 Source: {}", ctx.source);
    log::info!("🌐 Listen: {}", ctx.api_listen);
}

// --- Entry Point ---

pub async fn run() -> Result<()> {
    let (app, cli) = App::from_cli()?;

    // One-shot commands read the feed once and exit
    if let Some(cmd) = &cli.cmd {
        return cmd.run(&app.config).await;
    }

    app.run_daemon().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{SourceLocation, StaticSource};
    use serde_json::json;
    use std::time::Duration;

    fn make_app(port: u16) -> App {
        let config = context::Context {
            source: SourceLocation::File("repos.json".into()),
            upstream_url: url::Url::parse("http://127.0.0.1:9/repos.json").unwrap(),
            api_listen: format!("127.0.0.1:{}", port).parse().unwrap(),
            timeout: Duration::from_secs(1),
            log_file: None,
        };
        App::new(config)
    }

    #[tokio::test]
    async fn wait_for_shutdown_exits_when_task_finishes() {
        let app = make_app(0);

        // Exits immediately, which should trigger the shutdown path
        let mut rest_task = tokio::spawn(async {});

        let res = app.wait_for_shutdown(&mut rest_task).await;
        assert!(res.is_ok());
        assert!(app.shutdown.is_cancelled());
    }

    #[tokio::test]
    async fn spawn_rest_server_serves_proxied_repos() {
        let port = 34687;
        let app = make_app(port);
        let source = Arc::new(StaticSource::new(json!([{"name": "alpha"}])));

        let handle = app.spawn_rest_server(source);

        // Give it a moment to bind
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
        assert!(
            !handle.is_finished(),
            "REST server task finished unexpectedly (likely bind failed)"
        );

        let stream = tokio::net::TcpStream::connect(format!("127.0.0.1:{}", port)).await;
        assert!(stream.is_ok(), "Failed to connect to REST server");
        let mut stream = stream.unwrap();

        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        stream
            .write_all(b"GET /api/repos HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();

        let mut buffer = Vec::new();
        stream.read_to_end(&mut buffer).await.unwrap();
        let response = String::from_utf8_lossy(&buffer);

        assert!(response.contains("200 OK"));
        assert!(response.contains("\"count\":1"));

        app.shutdown.cancel();
        let _ = handle.await;
    }
}
