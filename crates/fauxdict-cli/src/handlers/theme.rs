use anyhow::Result;
use fauxdict_engine::Coordinator;
use fauxdict_runtime::FilePreferenceStore;

use super::HandlerContext;
use crate::args::ThemeCommand;
use crate::presentation::presenters;

pub fn handle(ctx: &HandlerContext, command: ThemeCommand) -> Result<()> {
    let store = FilePreferenceStore::in_dir(ctx.data_dir());
    let path = store.path().to_path_buf();
    let mut coordinator = Coordinator::new(Box::new(store));

    let (preference, toggled) = match command {
        ThemeCommand::Show => (coordinator.preference(), false),
        ThemeCommand::Toggle => (coordinator.toggle_theme(), true),
    };

    ctx.render(presenters::present_theme(preference, toggled, &path))
}
