use crate::components::*;
use crate::simulation::{Simulation, SimulationSet};
use bevy::prelude::*;

const FLOOR_Z: f32 = 0.0;
const LIFT_Z: f32 = 1.0;
const CAR_Z: f32 = 2.0;
const PLAYER_Z: f32 = 3.0;
const FLOOR_LINE_THICKNESS: f32 = 2.0;

/// Image handles loaded once and shared by every sprite that draws them.
#[derive(Resource, Default, Clone)]
pub struct SceneAssets {
    pub player: Handle<Image>,
    pub lift_car: Handle<Image>,
}

pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(SceneAssets::default())
            .add_systems(PreStartup, load_scene_assets)
            .add_systems(Startup, spawn_scene)
            .add_systems(Update, sync_sprites.after(SimulationSet::Advance));
    }
}

/// Center of a canvas-space rectangle (top-left origin, y down) in world space
/// (screen-centered origin, y up).
pub fn canvas_to_world(layout: &Layout, x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new(
        x + width / 2.0 - layout.screen_width / 2.0,
        layout.screen_height / 2.0 - (y + height / 2.0),
    )
}

fn load_scene_assets(asset_server: Res<AssetServer>, mut assets: ResMut<SceneAssets>) {
    assets.player = asset_server.load("frog.png");
    assets.lift_car = asset_server.load("lift_car.png");
}

fn spawn_scene(mut commands: Commands, sim: Res<Simulation>, assets: Res<SceneAssets>) {
    let layout = &sim.layout;
    commands.spawn(Camera2d);

    for lift in &sim.lifts {
        for (floor, line) in lift.floors.iter().enumerate() {
            let pos = canvas_to_world(layout, lift.x, line.y, lift.width, FLOOR_LINE_THICKNESS);
            commands.spawn((
                FloorLineSprite {
                    lane: lift.lane,
                    floor,
                },
                Sprite::from_color(
                    Color::srgb(0.9, 0.9, 0.9),
                    Vec2::new(lift.width, FLOOR_LINE_THICKNESS),
                ),
                Transform::from_xyz(pos.x, pos.y, FLOOR_Z),
            ));
        }

        let pos = canvas_to_world(layout, lift.x, lift.y, lift.width, lift.height);
        commands.spawn((
            LiftShaftSprite(lift.lane),
            Sprite::from_color(
                Color::srgba(0.5, 0.5, 0.5, 0.6),
                Vec2::new(lift.width, lift.height),
            ),
            Transform::from_xyz(pos.x, pos.y, LIFT_Z),
        ));
    }

    for car in &sim.cars {
        let pos = canvas_to_world(layout, car.x, car.y, car.width, car.height);
        commands.spawn((
            LiftCarSprite(car.lane),
            Sprite {
                image: assets.lift_car.clone(),
                custom_size: Some(Vec2::new(car.width, car.height)),
                ..default()
            },
            Transform::from_xyz(pos.x, pos.y, CAR_Z),
        ));
    }

    let player = &sim.player;
    let pos = canvas_to_world(layout, player.x, player.y, player.width, player.height);
    commands.spawn((
        PlayerSprite,
        Sprite {
            image: assets.player.clone(),
            custom_size: Some(Vec2::new(player.width, player.height)),
            ..default()
        },
        Transform::from_xyz(pos.x, pos.y, PLAYER_Z),
    ));
    info!(
        "scene spawned: {} lifts, {} cars, stage {:?}",
        sim.lifts.len(),
        sim.cars.len(),
        sim.stage
    );
}

/// Copy simulation positions onto the moving sprites.
fn sync_sprites(
    sim: Res<Simulation>,
    mut cars: Query<(&LiftCarSprite, &mut Transform), Without<PlayerSprite>>,
    mut player_query: Query<&mut Transform, (With<PlayerSprite>, Without<LiftCarSprite>)>,
) {
    let layout = &sim.layout;
    for (lane, mut transform) in cars.iter_mut() {
        let Some(car) = sim.cars.iter().find(|c| c.lane == lane.0) else {
            continue;
        };
        let pos = canvas_to_world(layout, car.x, car.y, car.width, car.height);
        transform.translation.x = pos.x;
        transform.translation.y = pos.y;
    }
    if let Ok(mut transform) = player_query.get_single_mut() {
        let player = &sim.player;
        let pos = canvas_to_world(layout, player.x, player.y, player.width, player.height);
        transform.translation.x = pos.x;
        transform.translation.y = pos.y;
    }
}
