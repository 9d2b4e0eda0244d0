// src/viewer/visualization/borders.rs
use crate::config::GlobeConfig;
use crate::math::geometry::polygon::outline_points;
use crate::math::types::*;
use crate::viewer::resources::{AtlasResource, DisplayOptions, Selection};
use bevy::prelude::*;

/// Abstand der Grenzlinien über der Kugel
const BORDER_LIFT: f32 = 0.02;

/// Vorberechnete Grenzlinien der ausgewählten Länder
#[derive(Resource, Debug, Default)]
pub struct CountryOutlines {
    pub strips: Vec<Vec<Point3D>>,
}

pub fn rebuild_outlines_system(
    selection: Res<Selection>,
    atlas: Res<AtlasResource>,
    config: Res<GlobeConfig>,
    mut outlines: ResMut<CountryOutlines>,
) {
    if !selection.is_changed() {
        return;
    }

    outlines.strips = selection
        .unique_ids()
        .into_iter()
        .filter_map(|id| atlas.0.get(id))
        .flat_map(|geometry| outline_points(geometry, config.radius + BORDER_LIFT))
        .collect();
    debug!("Rebuilt {} border strips.", outlines.strips.len());
}

pub fn draw_country_borders_system(
    mut gizmos: Gizmos,
    options: Res<DisplayOptions>,
    outlines: Res<CountryOutlines>,
) {
    if !options.show_borders {
        return;
    }

    let color = Color::rgba(1.0, 1.0, 1.0, 0.8);
    for strip in &outlines.strips {
        gizmos.linestrip(strip.iter().copied(), color);
    }
}
