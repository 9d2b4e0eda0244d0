// src/viewer/camera_driver.rs
use crate::camera::{CameraState, TourEvent, TourStop};
use crate::config::GlobeConfig;
use crate::viewer::resources::{ActiveKeyframe, CameraDirector, CatalogResource, Selection};
use bevy::prelude::*;
use bevy_egui::EguiContexts;
use bevy_panorbit_camera::PanOrbitCamera;
use std::f32::consts::TAU;

/// Orbit-Parameter (yaw, pitch, radius) für einen Keyframe, relativ zu seinem Blickpunkt
pub fn orbit_parameters(state: &CameraState) -> (f32, f32, f32) {
    let offset = state.position - state.target;
    let radius = offset.length();
    if radius <= f32::EPSILON {
        return (0.0, 0.0, 0.0);
    }
    let yaw = offset.x.atan2(offset.z);
    let pitch = (offset.y / radius).clamp(-1.0, 1.0).asin();
    (yaw, pitch, radius)
}

/// Verschiebt `yaw` um Vielfache von 2π, damit die Kamera den kurzen Weg nimmt
pub fn nearest_yaw(current: f32, yaw: f32) -> f32 {
    yaw + TAU * ((current - yaw) / TAU).round()
}

fn apply_keyframe(camera: &mut PanOrbitCamera, keyframe: &CameraState) {
    let (yaw, pitch, radius) = orbit_parameters(keyframe);
    camera.target_focus = keyframe.target;
    camera.target_yaw = nearest_yaw(camera.target_yaw, yaw);
    camera.target_pitch = pitch;
    camera.target_radius = radius;
}

/// Übergibt geänderte Auswahlen als neue Halte an die Tour
pub fn sync_tour_stops_system(
    selection: Res<Selection>,
    catalog: Res<CatalogResource>,
    config: Res<GlobeConfig>,
    mut director: ResMut<CameraDirector>,
) {
    if !selection.is_changed() {
        return;
    }

    let stops: Vec<TourStop> = selection
        .locations
        .iter()
        .map(|location| {
            let anchor = catalog
                .0
                .anchor_point(location, config.radius, config.camera.marker_offset);
            TourStop::new(location.clone(), anchor)
        })
        .collect();

    if director.tour.set_stops(stops) {
        director.active = None;
        info!("Tour restarted with {} locations.", selection.locations.len());
    }
}

/// Ziehen mit der Orbit-Taste hält die Tour an, Loslassen plant die Fortsetzung
pub fn detect_user_interaction_system(
    mouse: Res<ButtonInput<MouseButton>>,
    mut contexts: EguiContexts,
    cameras: Query<&PanOrbitCamera>,
    mut director: ResMut<CameraDirector>,
) {
    let Ok(camera) = cameras.get_single() else {
        return;
    };

    if mouse.just_pressed(camera.button_orbit) {
        if contexts.ctx_mut().wants_pointer_input() {
            return;
        }
        director.tour.begin_interaction();
        director.active = None;
    } else if mouse.just_released(camera.button_orbit) && director.tour.is_holding() {
        director.tour.end_interaction();
        debug!("Interaction ended, tour resumes shortly.");
    }
}

/// Tickt die Tour und führt die Kamera Keyframe für Keyframe
pub fn drive_camera_tour_system(
    time: Res<Time>,
    mut director: ResMut<CameraDirector>,
    mut cameras: Query<&mut PanOrbitCamera>,
) {
    let dt = time.delta_seconds();
    let CameraDirector {
        tour,
        planner,
        active,
        keyframe_seconds,
    } = &mut *director;

    match tour.update(dt, planner) {
        Some(TourEvent::StepPlanned {
            index, keyframes, ..
        }) => {
            if let Some(stop) = tour.stops().get(index) {
                info!(
                    "Flying to {} ({} keyframes).",
                    stop.location.name, keyframes
                );
            }
        }
        Some(TourEvent::Skipped { index }) => {
            if let Some(stop) = tour.stops().get(index) {
                warn!("No anchor for {}, skipped.", stop.location.name);
            }
        }
        None => {}
    }

    if active.is_none() {
        if let Some(ticket) = tour.next_keyframe() {
            for mut camera in cameras.iter_mut() {
                apply_keyframe(&mut camera, &ticket.keyframe);
            }
            *active = Some(ActiveKeyframe {
                ticket,
                remaining: *keyframe_seconds,
            });
        }
    }

    if let Some(current) = active {
        current.remaining -= dt;
        if current.remaining <= 0.0 {
            tour.complete_keyframe(current.ticket.generation);
            *active = None;
        }
    }
}
