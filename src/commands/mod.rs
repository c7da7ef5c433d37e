use anyhow::{Context as AnyhowContext, Result};

use crate::cli::Command;
use crate::context;
use crate::controller::{ListController, ListMode, LoadState};
use crate::source::AnySource;

mod feed;
mod list;

impl Command {
    pub async fn run(&self, ctx: &context::Context) -> Result<()> {
        match self {
            Command::List(args) => list::run(args, ctx).await,
            Command::Languages(output) => feed::languages(output, ctx).await,
            Command::Stats(output) => feed::stats(output, ctx).await,
        }
    }
}

/// Opens the configured source and performs the single load.
async fn load_controller(ctx: &context::Context, mode: ListMode) -> Result<ListController> {
    let source = AnySource::open(&ctx.source, ctx.timeout).context("opening repo source")?;
    let mut controller = ListController::new(mode);
    controller.load(&source).await?;
    Ok(controller)
}

fn ensure_loaded(controller: &ListController) -> Result<()> {
    match controller.state() {
        LoadState::Failed(message) => anyhow::bail!("{}", message),
        _ => Ok(()),
    }
}
