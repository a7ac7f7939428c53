//! CLI command implementations

mod score;
mod serve;

pub use score::cmd_score;
pub use serve::cmd_serve;
