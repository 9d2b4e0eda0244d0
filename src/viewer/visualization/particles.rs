// src/viewer/visualization/particles.rs
use crate::config::GlobeConfig;
use crate::math::types::*;
use crate::viewer::resources::{AtlasResource, SamplerResource, Selection};
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::render_asset::RenderAssetUsages;

/// Partikelwolke eines Landes
#[derive(Component, Debug)]
pub struct CountryParticles {
    pub id: String,
    pub area_scale: f32,
}

/// Sandfarbener Grundton der Partikel
const PARTICLE_COLOR: [u8; 3] = [0xD6, 0xC0, 0x99];

/// Größere Länder leuchten etwas kräftiger
pub fn particle_alpha(area_scale: f32) -> f32 {
    0.8 * (0.7 + area_scale.clamp(0.0, 1.0) * 0.3)
}

/// Punktwolke als Mesh; Normalen zeigen vom Kugelzentrum weg
pub fn build_point_mesh(points: &[Point3D]) -> Mesh {
    let positions: Vec<[f32; 3]> = points.iter().map(|p| p.to_array()).collect();
    let normals: Vec<[f32; 3]> = points
        .iter()
        .map(|p| p.normalize_or_zero().to_array())
        .collect();

    Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
}

/// Baut die Partikel neu auf, sobald sich die Auswahl ändert
pub fn rebuild_particles_system(
    mut commands: Commands,
    selection: Res<Selection>,
    atlas: Res<AtlasResource>,
    config: Res<GlobeConfig>,
    mut sampler: ResMut<SamplerResource>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    existing: Query<Entity, With<CountryParticles>>,
) {
    if !selection.is_changed() {
        return;
    }

    for entity in existing.iter() {
        commands.entity(entity).despawn_recursive();
    }

    let mut total = 0usize;
    for id in selection.unique_ids() {
        let sampled = sampler.0.sample_by_id(&atlas.0, id, config.radius);
        if sampled.is_empty() {
            continue;
        }
        total += sampled.len();

        let [r, g, b] = PARTICLE_COLOR;
        let material = StandardMaterial {
            base_color: Color::rgba_u8(r, g, b, 255).with_a(particle_alpha(sampled.area_scale)),
            unlit: true,
            alpha_mode: AlphaMode::Add,
            ..default()
        };

        commands.spawn((
            PbrBundle {
                mesh: meshes.add(build_point_mesh(&sampled.points)),
                material: materials.add(material),
                ..default()
            },
            CountryParticles {
                id: id.to_string(),
                area_scale: sampled.area_scale,
            },
        ));
    }

    info!(
        "Particles rebuilt: {} points for {} locations.",
        total,
        selection.locations.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_alpha_range() {
        assert_relative_eq!(particle_alpha(0.0), 0.56, epsilon = 1e-6);
        assert_relative_eq!(particle_alpha(1.0), 0.8, epsilon = 1e-6);
        assert_relative_eq!(particle_alpha(5.0), 0.8, epsilon = 1e-6);
    }

    #[test]
    fn test_point_mesh() {
        let points = vec![Point3D::X * 10.0, Point3D::Y * 10.0, Point3D::Z * 10.0];
        let mesh = build_point_mesh(&points);
        assert_eq!(mesh.primitive_topology(), PrimitiveTopology::PointList);
        assert_eq!(mesh.count_vertices(), 3);
    }
}
