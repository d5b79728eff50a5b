mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod feedback;
mod movement;
mod tilemap;
mod transitions;
mod ui;

use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Gridrunner".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(ClearColor(Color::srgb(0.08, 0.08, 0.11)))
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        transitions::TransitionsPlugin,
        tilemap::TilemapPlugin,
        movement::MovementPlugin,
        feedback::FeedbackPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
