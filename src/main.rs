use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::light::GlobalAmbientLight;
use bevy::picking::prelude::*;
use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowPlugin};

use bevy_panorbit_camera::{PanOrbitCamera, PanOrbitCameraPlugin};

#[cfg(feature = "dev")]
use bevy::dev_tools::fps_overlay::FpsOverlayPlugin;

mod camera;
mod config;
mod frame;
mod interaction;
mod orbital;
mod scene;
mod ui;

use camera::pose::OrbitAngles;
use camera::{CameraDirectorPlugin, MainCamera};
use config::AppConfig;
use frame::FramePlugin;
use interaction::InteractionPlugin;
use orbital::OrbitalPlugin;
use scene::ScenePlugin;
use ui::UiPlugin;

const INITIAL_CAMERA_POSITION: Vec3 = Vec3::new(0.0, 300.0, 1200.0);

// Setup lights and camera
pub fn setup(mut commands: Commands) {
    commands.insert_resource(GlobalAmbientLight {
        color: Color::WHITE,
        brightness: 400.0,
        ..default()
    });

    // Light radiating from the Sun at the origin
    commands.spawn((
        PointLight {
            intensity: 2.0e9,
            range: 5000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 0.0),
        Name::new("Sun light"),
    ));

    let angles = OrbitAngles::from_offset(INITIAL_CAMERA_POSITION);
    let pan_orbit = PanOrbitCamera {
        focus: Vec3::ZERO,
        radius: Some(angles.radius),
        yaw: Some(angles.yaw),
        pitch: Some(angles.pitch),
        zoom_lower_limit: 50.0,
        zoom_upper_limit: Some(2000.0),
        force_update: true,
        ..default()
    };

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: 60_f32.to_radians(),
            near: 0.1,
            far: 5000.0,
            ..default()
        }),
        Camera {
            order: 0,
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..default()
        },
        pan_orbit,
        MainCamera,
        Tonemapping::TonyMcMapface,
        Transform::from_translation(INITIAL_CAMERA_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Bevy Solar System".to_string(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }));

    #[cfg(feature = "dev")]
    app.add_plugins(FpsOverlayPlugin::default());

    // Logging is up once DefaultPlugins are added
    app.insert_resource(AppConfig::load_or_default());

    app.add_plugins(PanOrbitCameraPlugin);
    app.add_plugins(MeshPickingPlugin);

    app.add_plugins(FramePlugin);
    app.add_plugins(OrbitalPlugin);
    app.add_plugins(ScenePlugin);
    app.add_plugins(CameraDirectorPlugin);
    app.add_plugins(InteractionPlugin);
    app.add_plugins(UiPlugin);
    app.add_systems(Startup, setup);

    app.run();
}
