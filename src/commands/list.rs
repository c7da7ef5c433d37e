use anyhow::Result;
use chrono::Utc;

use super::{ensure_loaded, load_controller};
use crate::cli::ListArgs;
use crate::context;
use crate::controller::ListMode;
use crate::render::RenderPlan;
use crate::types::{Filter, FilterField};

pub async fn run(args: &ListArgs, ctx: &context::Context) -> Result<()> {
    let mode = if args.all {
        ListMode::Unpaged
    } else {
        ListMode::Paginated {
            page_size: args.page_size,
        }
    };
    let mut controller = load_controller(ctx, mode).await?;

    controller.set_filter(Filter::parse(
        FilterField::Search,
        args.search.as_deref().unwrap_or(""),
    )?);
    controller.set_filter(Filter::parse(
        FilterField::Language,
        args.language.as_deref().unwrap_or(""),
    )?);
    controller.set_filter(Filter::Health(args.health));
    controller.set_sort(args.sort);
    controller.set_page(args.page);

    let plan = RenderPlan::build(&controller, Utc::now());
    if args.output.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print!("{}", plan);
    }

    ensure_loaded(&controller)
}
