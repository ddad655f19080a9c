//! Pointer hit test, hover pulse and floating label

use bevy::picking::mesh_picking::ray_cast::{MeshRayCast, MeshRayCastSettings};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::camera::MainCamera;
use crate::config::AppConfig;
use crate::interaction::HoverLabel;
use crate::interaction::hover::{HoverChange, HoverState, owning_model};
use crate::scene::{BaseScale, BodyRegistry};

/// Pixel offset of the label from the cursor.
const LABEL_OFFSET_PX: f32 = 10.0;

pub fn spawn_hover_label(mut commands: Commands) {
    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::WHITE),
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
        Node {
            position_type: PositionType::Absolute,
            display: Display::None,
            padding: UiRect::axes(Val::Px(6.0), Val::Px(2.0)),
            ..default()
        },
        HoverLabel,
        Name::new("Hover label"),
    ));
}

/// System to hit-test the pointer against registered bodies every frame
#[allow(clippy::too_many_arguments)]
pub fn update_hover(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut ray_cast: MeshRayCast,
    registry: Res<BodyRegistry>,
    parents: Query<&ChildOf>,
    config: Res<AppConfig>,
    mut hover: ResMut<HoverState>,
    mut models: Query<(&mut Transform, &BaseScale)>,
    mut label: Query<(&mut Node, &mut Text), With<HoverLabel>>,
) {
    let cursor = windows.single().ok().and_then(Window::cursor_position);

    let hit = match (cursor, cameras.single()) {
        (Some(cursor), Ok((camera, cam_transform))) if !registry.is_empty() => camera
            .viewport_to_world(cam_transform, cursor)
            .ok()
            .and_then(|ray| {
                ray_cast
                    .cast_ray(ray, &MeshRayCastSettings::default())
                    .iter()
                    .find_map(|(entity, _)| owning_model(*entity, &parents, &registry))
            }),
        _ => None,
    };

    apply_hover_change(hover.update(hit), config.hover_pulse, &mut models);

    let Ok((mut node, mut text)) = label.single_mut() else {
        return;
    };
    match (hit.and_then(|model| registry.by_model(model)), cursor) {
        (Some(body), Some(cursor)) => {
            node.display = Display::Flex;
            node.left = Val::Px(cursor.x + LABEL_OFFSET_PX);
            node.top = Val::Px(cursor.y + LABEL_OFFSET_PX);
            if text.0 != body.params.name {
                text.0 = body.params.name.to_string();
            }
        }
        _ => {
            if node.display != Display::None {
                node.display = Display::None;
            }
        }
    }
}

/// Scale bodies from their stored base so a pulse is always undone exactly.
pub fn apply_hover_change(
    change: HoverChange,
    pulse: f32,
    models: &mut Query<(&mut Transform, &BaseScale)>,
) {
    if let Some(entity) = change.restore
        && let Ok((mut transform, base)) = models.get_mut(entity)
    {
        transform.scale = base.0;
    }
    if let Some(entity) = change.pulse
        && let Ok((mut transform, base)) = models.get_mut(entity)
    {
        transform.scale = base.0 * pulse;
    }
}
