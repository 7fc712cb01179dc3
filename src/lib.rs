//! Folio TUI - a single-page developer portfolio for the terminal.
//!
//! A portfolio content file renders as one tall scrollable page with
//! scroll-triggered reveal animations, section by section: hero, about,
//! skills, projects, certificates, contact form, footer. The binary in
//! `main.rs` owns the terminal and the event loop; all application state,
//! content loading, and rendering live in this library.

pub mod app;
pub mod config;
pub mod content;
pub mod form;
pub mod reveal;
pub mod scroll;
pub mod ui;
pub mod utils;
