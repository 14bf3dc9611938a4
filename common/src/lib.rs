//! Retro microchip widget.
//!
//! Platform-agnostic core of a decorative "microchip" graphic with animated
//! pins, status LEDs and color stripes:
//!
//! - [`colors`]: RGB565 palette, blending and hex color parsing
//! - [`config`]: Widget configuration and its defaults
//! - [`geometry`]: Size preset resolution and derived measurements
//! - [`animations`]: Pulse phase, pin shimmer and hover transitions
//! - [`timer`]: Scoped periodic pulse timer
//! - [`state`]: Hover/animation state machine
//! - [`events`]: Lifecycle event ring buffer
//! - [`layout`]: Container sizing policy and placement
//! - [`scene`]: Ordered render tree
//! - [`styles`]: Fonts and text styles
//! - [`widgets`]: Drawing the render tree
//! - [`widget`]: The mounted widget instance
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` outside of tests. Time is pushed in by the host as
//! elapsed milliseconds, so there is no dependency on `std::time`.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod animations;
pub mod colors;
pub mod config;
pub mod events;
pub mod geometry;
pub mod layout;
pub mod scene;
pub mod state;
pub mod styles;
pub mod timer;
pub mod widget;
pub mod widgets;

// Re-export commonly used items
pub use colors::{ColorParseError, parse_hex_color};
pub use config::{BorderStyle, ChipConfig, ChipSize, ContainerMode, StyleOverrides};
pub use events::{ChipEvent, EventLog};
pub use geometry::Geometry;
pub use layout::{PointF, RectF};
pub use widget::ChipWidget;
