//! SGR style resolution.
//!
//! Folds the control tokens attached to each cell into a running [`Style`]
//! and lays the styled characters out into a [`crate::grid::Grid`].

mod palette;
mod resolver;

pub use palette::Rgb;
pub use resolver::{fold, resolve, Style};
