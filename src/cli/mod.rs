mod commands;
mod handlers;

pub use commands::{Cli, Commands};
pub use handlers::{handle_seed, handle_serve};
