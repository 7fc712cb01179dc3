//! The declarative reveal engine.
//!
//! Animations are described as data and driven by pushed visibility:
//!
//! - `easing`: the named interpolation curves
//! - `transition`: `Transition` records and `VisualParams` interpolation
//! - `stagger`: cascading delay assignment for child sequences
//! - `engine`: registration, visibility pushes, trigger-once state, ticking

pub mod easing;
pub mod engine;
pub mod stagger;
pub mod transition;

pub use easing::{ping_pong, Easing};
pub use engine::{RevealEngine, RevealHandle, RevealState};
pub use stagger::{delay_for, stagger};
pub use transition::{Transition, VisualParams};
