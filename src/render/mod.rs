//! Rasterization of the resolved grid.
//!
//! [`rasterize`] walks the grid and issues drawing calls against a
//! [`Surface`]. The crate ships two surfaces: [`PixmapSurface`], an RGB
//! pixel buffer that can encode PNG, and [`RecordingSurface`], which logs
//! the call sequence for inspection and tests.

mod font;
mod pixmap;
mod rasterizer;
mod shape;
mod surface;

pub use font::load_font;
pub use pixmap::{PixmapSurface, RenderError};
pub use rasterizer::{canvas_size, rasterize};
pub use shape::{Corner, Direction, Shape};
pub use surface::{RecordingSurface, Surface, SurfaceOp};
