// src/viewer/visualization/mod.rs
pub mod borders;
pub mod markers;
pub mod particles;
