//! Utility helpers shared across the bottom bar modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules hold the pure collaborators the bar calls into (CRS
//! registry, reprojection, number formatting, messages) so components stay
//! thin and the logic stays testable without a browser.

pub mod crs;
pub mod crs_filter;
pub mod i18n;
pub mod locale;
pub mod reproject;
