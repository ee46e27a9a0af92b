use anyhow::Result;
use fauxdict_runtime::fetcher_for;

use super::HandlerContext;
use crate::presentation::presenters;

pub fn handle(ctx: &HandlerContext) -> Result<()> {
    let location = ctx.config.source_location(ctx.data_dir());
    let fetcher = fetcher_for(&location, ctx.config.fetch_timeout());
    let source = fauxdict_engine::load(fetcher.as_ref(), &ctx.config.source.list_field);

    ctx.render(presenters::present_source(&source))
}
