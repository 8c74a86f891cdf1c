//! Data types for the grid widget.

mod bound;
mod cell;
mod style;
mod table;

pub use bound::*;
pub use cell::*;
pub use style::*;
pub use table::*;
