#[tokio::main]
async fn main() -> anyhow::Result<()> {
    repo_dashboard::tracing::init();
    repo_dashboard::app::run().await
}
