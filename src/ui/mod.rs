//! Terminal UI module using ratatui.
//!
//! This module provides the TUI rendering and input handling:
//!
//! - `render`: Frame composition, page blit and chrome
//! - `input`: Keyboard and mouse event handling
//! - `sections`: Per-section renderers for the portfolio page
//! - `styles`: Color palette, fades and text styling
//! - `decor`: Ambient background blobs
//! - `marquee`: The looping skill ticker

pub mod decor;
pub mod input;
pub mod marquee;
pub mod render;
pub mod sections;
pub mod styles;
