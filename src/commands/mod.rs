//! Subcommand implementations

mod render;
mod status;
mod urls;

pub use render::cmd_render;
pub use status::cmd_status;
pub use urls::cmd_urls;
