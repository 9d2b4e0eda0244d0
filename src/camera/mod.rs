// src/camera/mod.rs

pub mod path;
pub mod tour;

pub use path::{CameraPathPlanner, CameraState};
pub use tour::{CameraTour, KeyframeTicket, TourEvent, TourPhase, TourStop};
