//! Pieces shared by the per-day solutions: small geometry types, a dense
//! grid, a string splitter, and the error type every parser reports through.

mod error;
mod line;
mod split;
mod table;
mod vec2d;

pub use error::{Error, Result};
pub use line::Line2d;
pub use split::{split, SplitBehaviour};
pub use table::Table;
pub use vec2d::Vec2d;
