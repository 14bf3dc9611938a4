//! Event log overlay, toggled with `D` in the window.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use retro_chip_common::EventLog;
use retro_chip_common::colors::HOST_BACKGROUND;
use retro_chip_common::events::EVENT_LOG_SIZE;
use retro_chip_common::styles::{OVERLAY_STYLE, TOP_LEFT};

/// Overlay position and size.
const OVERLAY_X: i32 = 8;
const OVERLAY_Y: i32 = 8;
const OVERLAY_WIDTH: u32 = 110;
const LINE_HEIGHT: i32 = 12;

/// Draw the event log in the top-left corner, oldest first.
pub fn draw_event_overlay<D>(display: &mut D, events: &EventLog)
where
    D: DrawTarget<Color = Rgb565>,
{
    let height = (EVENT_LOG_SIZE as u32 + 1) * LINE_HEIGHT as u32 + 4;
    Rectangle::new(Point::new(OVERLAY_X - 2, OVERLAY_Y - 2), Size::new(OVERLAY_WIDTH, height))
        .into_styled(PrimitiveStyle::with_fill(HOST_BACKGROUND))
        .draw(display)
        .ok();

    Text::with_text_style("EVENTS", Point::new(OVERLAY_X, OVERLAY_Y), OVERLAY_STYLE, TOP_LEFT)
        .draw(display)
        .ok();

    for (i, event) in events.iter().enumerate() {
        let y = OVERLAY_Y + (i as i32 + 1) * LINE_HEIGHT;
        Text::with_text_style(event.label(), Point::new(OVERLAY_X, y), OVERLAY_STYLE, TOP_LEFT)
            .draw(display)
            .ok();
    }
}

// =============================================================================
// Tests
// =============================================================================
