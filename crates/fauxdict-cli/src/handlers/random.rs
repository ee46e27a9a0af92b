use anyhow::Result;

use super::HandlerContext;
use crate::presentation::presenters;

pub fn handle(ctx: &HandlerContext, pages: u64, search: Option<String>) -> Result<()> {
    let mut session = ctx.start_session();
    session.load_pages(pages as usize);
    session
        .coordinator_mut()
        .set_search_term(search.unwrap_or_default());

    let picked = session.pick_random_visible();

    let coordinator = session.coordinator_mut();
    let candidates = coordinator.visible_count();
    let term = coordinator.search_term().to_string();
    let entry = picked.and_then(|id| coordinator.entries().iter().find(|e| e.id == id));

    let view_model = presenters::present_random_entry(entry, candidates, &term);
    ctx.render(view_model)
}
