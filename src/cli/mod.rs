pub mod args;
pub use args::*;

pub mod cli;
pub use cli::*;
