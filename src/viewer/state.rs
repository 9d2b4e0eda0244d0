// src/viewer/state.rs
use bevy::prelude::*;

#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum ViewerState {
    #[default] // Startzustand, bis Konfiguration und Daten geladen sind
    Loading,
    Ready,
}
