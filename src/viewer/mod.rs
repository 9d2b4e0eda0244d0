// src/viewer/mod.rs
pub mod camera_driver;
pub mod resources;
pub mod state;
pub mod ui;
pub mod visualization;
