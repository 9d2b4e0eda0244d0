// ./src/main.rs
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use bevy_panorbit_camera::PanOrbitCameraPlugin;

// Eigene Module deklarieren
pub mod atlas;
pub mod camera;
pub mod config;
pub mod math;
pub mod setup;
pub mod viewer;

use setup::{load_globe_data_system, setup_scene};
use viewer::{
    camera_driver::{
        detect_user_interaction_system, drive_camera_tour_system, sync_tour_stops_system,
    },
    resources::DisplayOptions,
    state::ViewerState,
    ui::location_selector_ui_system,
    visualization::{
        borders::{CountryOutlines, draw_country_borders_system, rebuild_outlines_system},
        markers::draw_location_markers_system,
        particles::rebuild_particles_system,
    },
};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(EguiPlugin)
        .add_plugins(PanOrbitCameraPlugin)
        .init_resource::<DisplayOptions>()
        .init_resource::<CountryOutlines>()
        .init_state::<ViewerState>()
        // Konfiguration und Daten laden, danach wechselt der State auf Ready
        .add_systems(Startup, load_globe_data_system)
        .add_systems(OnEnter(ViewerState::Ready), setup_scene)
        .add_systems(
            Update,
            (
                // Block 1: UI und Auswahl
                location_selector_ui_system,
                // Block 2: Auswahländerungen weiterreichen
                sync_tour_stops_system,
                rebuild_particles_system,
                rebuild_outlines_system,
                // Block 3: Kamera
                detect_user_interaction_system,
                drive_camera_tour_system,
            )
                .chain()
                .run_if(in_state(ViewerState::Ready)),
        )
        .add_systems(
            Update,
            (draw_country_borders_system, draw_location_markers_system)
                .run_if(in_state(ViewerState::Ready)),
        )
        .run();
}
