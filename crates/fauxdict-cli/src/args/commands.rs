use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Browse the dictionary interactively (default)")]
    Browse,

    #[command(about = "Print dictionary entries")]
    List {
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u64).range(1..))]
        pages: u64,

        #[arg(long, help = "Only show entries containing this text (case-insensitive)")]
        search: Option<String>,
    },

    #[command(about = "Print one random entry")]
    Random {
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u64).range(1..))]
        pages: u64,

        #[arg(long, help = "Only pick among entries containing this text")]
        search: Option<String>,
    },

    #[command(about = "Show or change the dark mode preference")]
    Theme {
        #[command(subcommand)]
        command: Option<ThemeCommand>,
    },

    #[command(about = "Report where the word list was loaded from")]
    Source,
}

#[derive(Subcommand)]
pub enum ThemeCommand {
    #[command(about = "Show the stored theme")]
    Show,

    #[command(about = "Switch between light and dark")]
    Toggle,
}
