//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render map viewer chrome while reading shared state from
//! Leptos context providers.

pub mod bottom_bar;
pub mod coordinate_displayer;
pub mod map_surface;
