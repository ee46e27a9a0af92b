use std::time::Duration;

use anyhow::Result;
use fauxdict_runtime::Session;

use super::HandlerContext;
use crate::args::hints::cmd;
use crate::presentation::components::Action;
use crate::presentation::presenters;
use crate::presentation::renderers::TuiRenderer;
use crate::presentation::view_models::Guidance;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub fn handle(ctx: &HandlerContext) -> Result<()> {
    let mut session = ctx.start_session();
    let mut tui = TuiRenderer::new()?;

    let result = event_loop(&mut tui, &mut session);

    tui.restore()?;
    result
}

fn event_loop(tui: &mut TuiRenderer, session: &mut Session) -> Result<()> {
    loop {
        session.pump();

        if session.coordinator_mut().take_scroll_to_top() {
            tui.browser_mut().scroll_to_top();
        }
        let focus = session.coordinator_mut().take_focus_request();

        let source_pending = session.is_source_pending();
        let screen = presenters::present_screen(session.coordinator_mut(), source_pending);
        if let Some(id) = focus {
            tui.browser_mut().focus_on(id.get(), &screen);
        }

        tui.draw(&screen)?;

        session
            .coordinator_mut()
            .on_scroll(tui.browser().scroll_offset());
        if tui.browser().sentinel_visible(&screen) {
            session.on_sentinel_visible();
        }

        match tui.poll_action(&screen, POLL_INTERVAL)? {
            Some(Action::Quit) => break,
            Some(Action::ToggleTheme) => {
                session.toggle_theme();
            }
            Some(Action::RandomEntry) => {
                session.pick_random_visible();
            }
            Some(Action::ScrollToTop) => session.coordinator_mut().scroll_to_top(),
            Some(Action::SearchChanged(term)) => session.coordinator_mut().set_search_term(term),
            None => {}
        }
    }

    Ok(())
}

/// `browse` with stdout redirected: print the first page instead of taking over the terminal.
pub fn handle_non_interactive(ctx: &HandlerContext) -> Result<()> {
    let mut session = ctx.start_session();
    session.wait_idle();

    let coordinator = session.coordinator_mut();
    let total_loaded = coordinator.entries().len();
    let pagination = coordinator.pagination();
    let fallback = coordinator
        .source()
        .is_some_and(|s| s.origin().is_fallback());
    let visible = coordinator.visible_entries();

    let view_model =
        presenters::present_entry_list(&visible, total_loaded, "", pagination, fallback)
            .with_suggestion(
                Guidance::new("Run in a terminal to browse interactively")
                    .with_command(cmd::BROWSE),
            );
    ctx.render(view_model)
}
