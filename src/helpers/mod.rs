//! Domain helpers that assemble skill-guided prompts and dispatch them
//! with a fixed task category, bypassing classification.

pub mod debug;
pub mod frontend;

pub use debug::DebugHelper;
pub use frontend::FrontendHelper;
