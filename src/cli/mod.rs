pub mod commands;

pub use commands::{Cli, Commands, print_response, run};
