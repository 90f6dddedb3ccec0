//! Core data models for the season analysis engine.

mod analysis;
mod driver;
mod event;
mod ids;
mod result;

pub use analysis::*;
pub use driver::*;
pub use event::*;
pub use ids::*;
pub use result::*;
