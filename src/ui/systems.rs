//! UI input handling and display updates

use bevy::prelude::*;
use chrono::{DateTime, Local};

use crate::camera::FocusRequest;
use crate::orbital::{SimulationTime, TimeMode, TimeModeRequest};
use crate::ui::panels::{BUTTON_BG, BUTTON_BG_ACTIVE, BUTTON_BG_HOVER, BUTTON_BG_PRESSED};
use crate::ui::{FocusButton, TimeDisplay, TimeModeButton};

/// System to turn body button presses into focus requests
pub fn focus_button_system(
    buttons: Query<(&Interaction, &FocusButton), Changed<Interaction>>,
    mut requests: MessageWriter<FocusRequest>,
) {
    for (interaction, button) in &buttons {
        if *interaction == Interaction::Pressed {
            requests.write(FocusRequest::Body(button.0.to_string()));
        }
    }
}

/// System to turn time mode button presses into mode requests
pub fn time_mode_button_system(
    buttons: Query<(&Interaction, &TimeModeButton), Changed<Interaction>>,
    mut requests: MessageWriter<TimeModeRequest>,
) {
    for (interaction, button) in &buttons {
        if *interaction == Interaction::Pressed {
            requests.write(TimeModeRequest(button.0));
        }
    }
}

/// Keyboard shortcuts: S static, P present, Escape clears focus
pub fn keyboard_shortcuts(
    input: Res<ButtonInput<KeyCode>>,
    mut mode_requests: MessageWriter<TimeModeRequest>,
    mut focus_requests: MessageWriter<FocusRequest>,
) {
    if input.just_pressed(KeyCode::KeyS) {
        mode_requests.write(TimeModeRequest(TimeMode::Static));
    }
    if input.just_pressed(KeyCode::KeyP) {
        mode_requests.write(TimeModeRequest(TimeMode::Present));
    }
    if input.just_pressed(KeyCode::Escape) {
        focus_requests.write(FocusRequest::Clear);
    }
}

/// System to color buttons by interaction and highlight the active mode
pub fn button_colors(
    sim_time: Res<SimulationTime>,
    mut buttons: Query<(&Interaction, &mut BackgroundColor, Option<&TimeModeButton>), With<Button>>,
) {
    for (interaction, mut bg, mode_button) in &mut buttons {
        let active = mode_button.is_some_and(|b| b.0 == sim_time.mode);
        bg.0 = match interaction {
            Interaction::Pressed => BUTTON_BG_PRESSED,
            Interaction::Hovered => BUTTON_BG_HOVER,
            Interaction::None if active => BUTTON_BG_ACTIVE,
            Interaction::None => BUTTON_BG,
        };
    }
}

pub fn time_display_text(mode: TimeMode, now: DateTime<Local>) -> String {
    match mode {
        TimeMode::Present => now.format("%Y-%m-%d %H:%M:%S").to_string(),
        TimeMode::Static => "Static View".to_string(),
    }
}

/// System to refresh the time display
pub fn update_time_display(
    sim_time: Res<SimulationTime>,
    mut display: Query<&mut Text, With<TimeDisplay>>,
) {
    let Ok(mut text) = display.single_mut() else {
        return;
    };
    let value = time_display_text(sim_time.mode, Local::now());
    if text.0 != value {
        text.0 = value;
    }
}
