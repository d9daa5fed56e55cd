//! CLI command handlers.

mod optimize;

pub use optimize::run_optimize;
#[cfg(test)]
pub(crate) use optimize::progress_line;
