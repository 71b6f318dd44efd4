//! NEO Orrery - solar system view with near-Earth objects
//!
//! A library crate providing the orrery's plugins and data types
//! for testing and integration purposes.

pub mod camera;
pub mod config;
pub mod neo;
pub mod render;
pub mod time;
pub mod types;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
