//! Drawing layer for the chip widget.
//!
//! All drawing is generic over `DrawTarget<Color = Rgb565>` for platform independence.

mod chip;
mod primitives;

#[cfg(test)]
pub(crate) mod test_canvas;

pub use chip::draw_scene;
pub use primitives::{draw_frame, draw_label, fill_circle, fill_rounded, label_scale};
