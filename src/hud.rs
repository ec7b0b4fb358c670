//! Status overlay: current level, spawn-window countdown, controls hint.

use crate::config::TuningConfig;
use crate::level::LevelTimer;
use bevy::prelude::*;

/// Marker for the status text node refreshed by [`hud_status_system`].
#[derive(Component)]
pub struct HudStatusText;

/// Render the status line for the timer's current state.
fn status_line(timer: &LevelTimer) -> String {
    let window = if timer.is_spawning() {
        format!("Time Remaining: {}s", timer.remaining_secs())
    } else {
        "Spawn window closed (press Enter)".to_string()
    };
    format!("Level: {}  {}", timer.current_level, window)
}

/// Spawn the top-left status overlay.
///
/// The status line is rendered from the live [`LevelTimer`], so the first
/// frame already shows the configured window length instead of a placeholder.
pub fn setup_hud(mut commands: Commands, config: Res<TuningConfig>, timer: Res<LevelTimer>) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            top: Val::Px(10.0),
            flex_direction: FlexDirection::Column,
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                HudStatusText,
                Text::new(status_line(&timer)),
                TextFont {
                    font_size: config.hud_font_size,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            parent.spawn((
                Text::new(
                    "WASD move, Space jump, left-click arrow, right-click boomerang, \
                     Enter next level",
                ),
                TextFont {
                    font_size: config.hud_font_size * 0.7,
                    ..default()
                },
                TextColor(Color::srgba(1.0, 1.0, 1.0, 0.75)),
            ));
        });
}

/// Refresh the status line whenever the level timer changes.
pub fn hud_status_system(
    timer: Res<LevelTimer>,
    mut q_text: Query<&mut Text, With<HudStatusText>>,
) {
    if !timer.is_changed() {
        return;
    }
    for mut text in q_text.iter_mut() {
        text.0 = status_line(&timer);
    }
}
