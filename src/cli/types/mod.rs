//! Type-safe wrappers and enums for baseball data.

pub mod category;
pub mod ids;
pub mod position;

pub use category::{SortDirection, StatCategory};
pub use ids::{PlayerId, TeamId};
pub use position::{BatSide, Position, ThrowSide};
