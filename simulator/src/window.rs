//! Interactive SDL2 window.

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use retro_chip_common::{ChipWidget, PointF};

use crate::host::HostPage;
use crate::overlay::draw_event_overlay;
use crate::timing::FRAME_TIME;

/// Run the window until it is closed.
pub fn run(widget: &mut ChipWidget<'_>, host: &HostPage, size: Size, scale: u32) {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(size);
    let output_settings = OutputSettingsBuilder::new().scale(scale).build();
    let mut window = Window::new("Retro Microchip", &output_settings);

    host.draw(&mut display);
    widget.draw(&mut display, host.content_area());
    window.update(&display);

    let mut show_events = false;
    let mut last_frame = Instant::now();

    loop {
        let frame_start = Instant::now();

        for event in window.events() {
            match event {
                SimulatorEvent::Quit => return,
                SimulatorEvent::MouseMove { point } => {
                    let point = PointF::new(point.x as f32, point.y as f32);
                    widget.pointer_moved(point, host.content_area());
                }
                SimulatorEvent::KeyDown { keycode: Keycode::D, repeat: false, .. } => {
                    show_events = !show_events;
                    tracing::debug!(show_events, "event overlay toggled");
                }
                _ => {}
            }
        }

        let dt = u32::try_from(last_frame.elapsed().as_millis()).unwrap_or(u32::MAX);
        last_frame = Instant::now();
        widget.advance(dt);

        host.draw(&mut display);
        widget.draw(&mut display, host.content_area());
        if show_events {
            draw_event_overlay(&mut display, widget.events());
        }
        window.update(&display);

        let elapsed = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(elapsed) {
            thread::sleep(remaining);
        }
    }
}
