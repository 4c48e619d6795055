use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};

use gatito_garden::config::ConfigPlugin;
use gatito_garden::input::InputPlugin;
use gatito_garden::loading::LoadingPlugin;
use gatito_garden::player::PlayerPlugin;
use gatito_garden::popup::PopupPlugin;
use gatito_garden::shared::*;
use gatito_garden::ui::UiPlugin;
use gatito_garden::world::WorldPlugin;

fn main() {
    // Resolved once: the window needs the canvas size before the plugin runs.
    let config = ConfigPlugin::resolve();
    let canvas = config.config.canvas;

    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Gatito Garden".into(),
                    resolution: WindowResolution::new(canvas.width, canvas.height),
                    present_mode: PresentMode::AutoVsync,
                    resizable: false,
                    ..default()
                }),
                ..default()
            })
            .set(ImagePlugin::default_nearest()),
    )
    .insert_resource(ClearColor(Color::srgb(0.55, 0.78, 0.45)))
    // Game state
    .init_state::<GameState>();

    GardenSet::configure(&mut app);

    app
        // Domain plugins
        .add_plugins(config)
        .add_plugins(LoadingPlugin)
        .add_plugins(InputPlugin)
        .add_plugins(PopupPlugin)
        .add_plugins(PlayerPlugin)
        .add_plugins(WorldPlugin)
        .add_plugins(UiPlugin)
        // Camera
        .add_systems(Startup, setup_camera)
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
