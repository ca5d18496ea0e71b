//! Detail screen for a selected keyword.

mod detail_screen;

pub use detail_screen::DetailScreen;
