//! Rendering layer: all terminal I/O lives here.
//!
//! Scenes draw in world coordinates (a 342×224 backdrop) through the
//! [`Drawer`], which scales into a [`FrameBuffer`] sized to the terminal.
//! Each terminal cell shows two stacked pixels with a half-block glyph, and
//! texture captions are printed as plain text on top.

mod drawer;
mod framebuffer;
mod terminal;

pub use drawer::{Drawer, Flip, GLYPH_STRIDE};
pub use framebuffer::{Caption, FrameBuffer};
pub use terminal::present;
