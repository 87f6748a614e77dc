//! CLI command handlers. Each command is in its own file.

mod encode;
mod filename;
mod run;

pub use encode::run_encode;
pub use filename::run_filename;
pub use run::{run_batch, RunOverrides};
