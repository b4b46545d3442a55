//! CLI domain: parse, route, and output only.
//! No domain orchestration; the route table dispatches to the engine and
//! owns the root-path validation the engine deliberately does not repeat.

mod output;
mod parse;
mod route;

pub use output::{format_init_summary, map_error, render_error, wants_json};
pub use parse::{Cli, Commands};
pub use route::RunContext;
