use anyhow::Result;

use super::HandlerContext;
use crate::presentation::presenters;

pub fn handle(ctx: &HandlerContext, pages: u64, search: Option<String>) -> Result<()> {
    let mut session = ctx.start_session();
    session.load_pages(pages as usize);

    let coordinator = session.coordinator_mut();
    coordinator.set_search_term(search.unwrap_or_default());

    let total_loaded = coordinator.entries().len();
    let pagination = coordinator.pagination();
    let fallback = coordinator
        .source()
        .is_some_and(|s| s.origin().is_fallback());
    let term = coordinator.search_term().to_string();
    let visible = coordinator.visible_entries();

    tracing::debug!(total_loaded, visible = visible.len(), "listing entries");

    let view_model =
        presenters::present_entry_list(&visible, total_loaded, &term, pagination, fallback);
    ctx.render(view_model)
}
