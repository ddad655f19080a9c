//! On-screen controls: body selection row, time mode buttons, time display

use bevy::prelude::*;

use crate::orbital::TimeMode;
use crate::orbital::params::selectable_bodies;
use crate::ui::{FocusButton, TimeDisplay, TimeModeButton};

pub const BUTTON_BG: Color = Color::srgba(0.06, 0.12, 0.16, 0.9);
pub const BUTTON_BG_HOVER: Color = Color::srgba(0.08, 0.2, 0.26, 0.95);
pub const BUTTON_BG_PRESSED: Color = Color::srgba(0.1, 0.26, 0.32, 0.95);
pub const BUTTON_BG_ACTIVE: Color = Color::srgba(0.08, 0.22, 0.28, 0.95);
const BUTTON_TEXT: Color = Color::srgba(0.6, 1.0, 1.0, 1.0);

fn button_node() -> Node {
    Node {
        padding: UiRect::axes(Val::Px(10.0), Val::Px(5.0)),
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        ..default()
    }
}

fn button_label(label: &str) -> impl Bundle + use<> {
    (
        Text::new(label),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(BUTTON_TEXT),
    )
}

pub fn spawn_controls(mut commands: Commands) {
    // Body selection along the bottom edge
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(12.0),
                left: Val::Px(12.0),
                right: Val::Px(12.0),
                flex_wrap: FlexWrap::Wrap,
                justify_content: JustifyContent::Center,
                column_gap: Val::Px(6.0),
                row_gap: Val::Px(6.0),
                ..default()
            },
            Name::new("Body selection"),
        ))
        .with_children(|row| {
            for body in selectable_bodies() {
                row.spawn((
                    Button,
                    button_node(),
                    BackgroundColor(BUTTON_BG),
                    FocusButton(body.name),
                ))
                .with_children(|button| {
                    button.spawn(button_label(body.name));
                });
            }
        });

    // Time mode toggles, top right
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(12.0),
                right: Val::Px(12.0),
                column_gap: Val::Px(6.0),
                ..default()
            },
            Name::new("Time mode"),
        ))
        .with_children(|row| {
            for (mode, label) in [
                (TimeMode::Static, "Static View"),
                (TimeMode::Present, "Present View"),
            ] {
                row.spawn((
                    Button,
                    button_node(),
                    BackgroundColor(BUTTON_BG),
                    TimeModeButton(mode),
                ))
                .with_children(|button| {
                    button.spawn(button_label(label));
                });
            }
        });

    // Time display, top left
    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        },
        TimeDisplay,
        Name::new("Time display"),
    ));
}
