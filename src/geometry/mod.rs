//! Karnaugh map geometry for implicant groups
//!
//! Maps positions onto Gray-ordered grids and computes, for each group, the
//! smallest wrap-around rectangle holding it so a front end can draw it.

mod gray;
mod layout;
mod resolve;

pub use gray::{gray_code, gray_rank};
pub use layout::{Cell, GridLayout};
pub use resolve::{minimal_cyclic_interval, resolve_rectangles, Rectangle, Tile};
