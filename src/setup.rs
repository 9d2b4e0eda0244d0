// ./src/setup.rs
use crate::atlas::{CountryAtlas, LocationCatalog};
use crate::config::{DEFAULT_CONFIG_PATH, GlobeConfig};
use crate::math::geometry::sphere::sampling::CountrySampler;
use crate::viewer::resources::*;
use crate::viewer::state::ViewerState;
use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;
use std::sync::Arc;

/// Lädt Konfiguration, Standortkatalog und Atlas und wechselt danach in `Ready`.
/// Fehlende Daten führen zu einer leeren Kugel, nicht zum Abbruch.
pub fn load_globe_data_system(
    mut commands: Commands,
    mut next_state: ResMut<NextState<ViewerState>>,
) {
    let config = GlobeConfig::load_or_default(DEFAULT_CONFIG_PATH);

    let catalog_result = match &config.locations_path {
        Some(path) => LocationCatalog::load(path),
        None => LocationCatalog::builtin(),
    };
    let catalog = catalog_result.unwrap_or_else(|err| {
        error!("Failed to load location catalog: {}", err);
        LocationCatalog::default()
    });
    for name in catalog.missing_anchors() {
        warn!("Location {} has no anchor, the camera will skip it.", name);
    }

    let atlas = match CountryAtlas::load(&config.dataset_path, &config.countries_object) {
        Ok(atlas) => atlas,
        Err(err) => {
            error!(
                "Failed to load world dataset {}: {}",
                config.dataset_path.display(),
                err
            );
            CountryAtlas::default()
        }
    };

    commands.insert_resource(Selection::all(&catalog));
    commands.insert_resource(CatalogResource(catalog));
    commands.insert_resource(AtlasResource(Arc::new(atlas)));
    commands.insert_resource(SamplerResource(CountrySampler::new(
        config.particles.clone(),
    )));
    commands.insert_resource(CameraDirector::new(&config));
    commands.insert_resource(config);

    next_state.set(ViewerState::Ready);
    info!("Globe data loaded, viewer is Ready.");
}

pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<GlobeConfig>,
) {
    // Dunkle Kugel als Hintergrund für die Partikel
    commands.spawn(PbrBundle {
        mesh: meshes.add(Sphere::new(config.radius).mesh().uv(64, 32)),
        material: materials.add(StandardMaterial {
            base_color: Color::rgb(0.05, 0.06, 0.08),
            metallic: 0.1,
            perceptual_roughness: 0.9,
            ..default()
        }),
        transform: Transform::from_xyz(0.0, 0.0, 0.0),
        ..default()
    });

    // Licht
    commands.spawn(PointLightBundle {
        point_light: PointLight {
            intensity: 10_000_000.,
            range: 100.0,
            ..default()
        },
        transform: Transform::from_translation(Vec3::new(4.0, 8.0, 4.0) * config.radius / 2.0),
        ..default()
    });

    // Kamera: Startposition vor der Kugel, leicht erhöht
    let camera = &config.camera;
    let start = Vec3::new(1.0, camera.y_offset, camera.distance);
    commands.spawn((
        Camera3dBundle {
            transform: Transform::from_translation(start).looking_at(Vec3::ZERO, Vec3::Y),
            ..default()
        },
        PanOrbitCamera {
            button_orbit: MouseButton::Left,
            pan_sensitivity: 0.0,
            radius: Some(start.length()),
            ..default()
        },
    ));
}
