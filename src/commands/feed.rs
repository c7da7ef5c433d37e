use anyhow::Result;

use super::{ensure_loaded, load_controller};
use crate::cli::OutputArgs;
use crate::context;
use crate::controller::ListMode;

pub async fn languages(output: &OutputArgs, ctx: &context::Context) -> Result<()> {
    let controller = load_controller(ctx, ListMode::Unpaged).await?;
    ensure_loaded(&controller)?;

    if output.json {
        println!("{}", serde_json::to_string_pretty(controller.languages())?);
    } else {
        for language in controller.languages() {
            println!("{}", language);
        }
    }
    Ok(())
}

pub async fn stats(output: &OutputArgs, ctx: &context::Context) -> Result<()> {
    let controller = load_controller(ctx, ListMode::Unpaged).await?;
    ensure_loaded(&controller)?;

    let stats = controller.stats();
    if output.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("Total repos:     {}", stats.total);
        println!("Healthy:         {}", stats.green);
        println!("Needs attention: {}", stats.yellow);
        println!("Stale:           {}", stats.red);
        println!("Unknown:         {}", stats.unknown);
    }
    Ok(())
}
