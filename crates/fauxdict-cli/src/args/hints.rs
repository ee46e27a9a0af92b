pub mod cmd {
    pub const LIST: &str = "fauxdict list";
    pub const BROWSE: &str = "fauxdict browse";
    pub const SOURCE: &str = "fauxdict source";
    pub const THEME_TOGGLE: &str = "fauxdict theme toggle";
}

pub mod fmt {
    pub fn list_pages(pages: u64) -> String {
        format!("fauxdict list --pages {}", pages)
    }

    pub fn list_source(location: &str) -> String {
        format!("fauxdict --source {} list", location)
    }
}
