// src/viewer/visualization/markers.rs
use crate::config::GlobeConfig;
use crate::viewer::resources::{CameraDirector, CatalogResource, DisplayOptions, Selection};
use bevy::prelude::*;

/// Zeichnet einen Punkt an jedem Standort-Anker; der aktuelle Tour-Halt ist hervorgehoben.
pub fn draw_location_markers_system(
    mut gizmos: Gizmos,
    options: Res<DisplayOptions>,
    selection: Res<Selection>,
    catalog: Res<CatalogResource>,
    config: Res<GlobeConfig>,
    director: Res<CameraDirector>,
) {
    if !options.show_markers {
        return;
    }

    let current = director
        .tour
        .focused_stop()
        .map(|stop| stop.location.id.as_str());
    let offset = config.camera.marker_offset;

    for location in &selection.locations {
        let Some(position) = catalog.0.anchor_point(location, config.radius, offset) else {
            continue;
        };
        let (radius, color) = if current == Some(location.id.as_str()) {
            (0.15, Color::rgb_u8(0xD6, 0xC0, 0x99))
        } else {
            (0.08, Color::rgba(1.0, 1.0, 1.0, 0.6))
        };
        gizmos.sphere(position, Quat::IDENTITY, radius, color);
    }
}
