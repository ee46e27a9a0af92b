mod context;

pub mod browse;
pub mod list;
pub mod random;
pub mod source;
pub mod theme;

pub use context::HandlerContext;
