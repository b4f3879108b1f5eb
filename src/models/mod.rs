//! Core data models for the rugby stats core.

mod club;
mod detail;
mod ids;
mod season;
mod stat;
mod summary;

pub use club::*;
pub use detail::*;
pub use ids::*;
pub use season::*;
pub use stat::*;
pub use summary::*;
