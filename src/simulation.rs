use bevy::prelude::*;

use crate::components::{DemoStage, Layout};
use crate::input::{InputCommand, VirtualInput};
use crate::lift::{Lift, LiftCar};
use crate::player::Player;

/// All game state, built once at startup.
#[derive(Resource, Clone, Debug)]
pub struct Simulation {
    pub layout: Layout,
    pub stage: DemoStage,
    pub player: Player,
    pub lifts: Vec<Lift>,
    pub cars: Vec<LiftCar>,
    pub frame: u64,
    /// Key commands handled so far, including ones that changed nothing.
    pub commands_applied: u64,
}

impl Simulation {
    pub fn new(layout: Layout, stage: DemoStage) -> Self {
        let mut player = Player::spawn(&layout);
        if !stage.has_floors() {
            // Without floors the player walks along the top edge.
            player.floor = 0;
            player.y = 0.0;
        }
        let lifts = (0..layout.lane_count())
            .map(|lane| Lift::new(lane, &layout, stage.has_floors()))
            .collect();
        let cars = if stage.has_lift_cars() {
            (0..layout.lane_count())
                .map(|lane| LiftCar::new(lane, &layout))
                .collect()
        } else {
            Vec::new()
        };
        Self {
            layout,
            stage,
            player,
            lifts,
            cars,
            frame: 0,
            commands_applied: 0,
        }
    }

    /// Apply one key command. Returns whether any state changed.
    pub fn apply(&mut self, command: InputCommand) -> bool {
        self.commands_applied = self.commands_applied.saturating_add(1);
        let layout = &self.layout;
        match command {
            InputCommand::MoveLeft => self.player.move_left(layout),
            InputCommand::MoveRight => self.player.move_right(layout),
            InputCommand::MoveUp if self.stage.has_floors() => self.player.move_up(layout),
            InputCommand::MoveDown if self.stage.has_floors() => self.player.move_down(layout),
            InputCommand::MoveUp | InputCommand::MoveDown => false,
            InputCommand::Warp(floor) => {
                let mut warped = false;
                for car in self.cars.iter_mut() {
                    if self.player.is_in_same_lane(car) && car.warp_to_floor(floor, layout) {
                        debug!("lift car {} warped to floor {}", car.lane, floor);
                        warped = true;
                    }
                }
                warped
            }
        }
    }

    /// Advance every lift car by one tick.
    pub fn tick(&mut self) {
        for car in self.cars.iter_mut() {
            car.update(&self.layout);
        }
        self.frame = self.frame.saturating_add(1);
    }
}

/// Ordering for the per-frame work: input, then cars. Rendering runs after.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Input,
    Advance,
}

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (SimulationSet::Input, SimulationSet::Advance).chain(),
        )
        .add_systems(Update, apply_input_commands.in_set(SimulationSet::Input))
        .add_systems(Update, advance_lift_cars.in_set(SimulationSet::Advance));
    }
}

fn apply_input_commands(mut vinput: ResMut<VirtualInput>, mut sim: ResMut<Simulation>) {
    for command in vinput.drain() {
        let changed = sim.apply(command);
        debug!(
            "{:?} -> changed={} lane={} floor={}",
            command, changed, sim.player.lane, sim.player.floor
        );
    }
}

fn advance_lift_cars(mut sim: ResMut<Simulation>) {
    sim.tick();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputPlugin;

    fn app_with(stage: DemoStage) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_plugins(InputPlugin)
            .add_plugins(SimulationPlugin)
            .insert_resource(Simulation::new(Layout::default(), stage));
        app
    }

    fn press(app: &mut App, key: &str) {
        app.world_mut().resource_mut::<VirtualInput>().push_key(key);
    }

    #[test]
    fn warp_only_moves_aligned_car() {
        let mut sim = Simulation::new(Layout::default(), DemoStage::LiftCars);
        assert_eq!(sim.player.lane, 1);
        let others: Vec<f32> = sim.cars.iter().map(|c| c.y).collect();

        assert!(sim.apply(InputCommand::Warp(2)));
        let floor_height = sim.layout.floor_height();
        assert_eq!(sim.cars[1].y, sim.layout.screen_height - 3.0 * floor_height);
        assert_eq!(sim.cars[0].y, others[0]);
        assert_eq!(sim.cars[2].y, others[2]);
    }

    #[test]
    fn warp_to_missing_floor_changes_nothing() {
        let mut sim = Simulation::new(Layout::default(), DemoStage::LiftCars);
        let before = sim.cars.clone();
        assert!(!sim.apply(InputCommand::Warp(7)));
        assert_eq!(sim.cars, before);
    }

    #[test]
    fn lanes_stage_ignores_vertical_moves_and_has_no_cars() {
        let mut sim = Simulation::new(Layout::default(), DemoStage::Lanes);
        assert!(sim.cars.is_empty());
        assert!(sim.lifts.iter().all(|l| l.floors.is_empty()));
        assert!(!sim.apply(InputCommand::MoveUp));
        assert!(!sim.apply(InputCommand::Warp(0)));
        assert!(sim.apply(InputCommand::MoveLeft));
        assert_eq!((sim.player.floor, sim.player.y), (0, 0.0));
        assert_eq!(sim.commands_applied, 3);
    }

    #[test]
    fn overlapping_lanes_warp_every_containing_car() {
        let layout = Layout {
            lanes: vec![100.0, 150.0, 600.0],
            ..Layout::default()
        };
        let mut sim = Simulation::new(layout, DemoStage::LiftCars);
        assert_eq!(sim.player.x, 175.0);
        assert!(sim.player.is_in_same_lane(&sim.cars[0]));

        assert!(sim.apply(InputCommand::Warp(1)));
        let target = sim.layout.warp_y(1);
        assert_eq!(target, 360.0);
        assert_eq!(sim.cars[0].y, target);
        assert_eq!(sim.cars[1].y, target);
        assert_eq!(sim.cars[2].y, 0.0);
    }

    #[test]
    fn tick_advances_every_car_once() {
        let mut sim = Simulation::new(Layout::default(), DemoStage::LiftCars);
        sim.tick();
        assert_eq!(sim.frame, 1);
        assert!(sim.cars.iter().all(|c| c.y == sim.layout.car_speed));
    }

    #[test]
    fn key_presses_apply_before_cars_advance() {
        let mut app = app_with(DemoStage::LiftCars);
        press(&mut app, "ArrowDown");
        press(&mut app, "ArrowUp");
        press(&mut app, "ArrowUp");
        press(&mut app, "3");
        app.update();

        let sim = app.world().resource::<Simulation>();
        assert_eq!(sim.player.floor, 2);
        assert_eq!(sim.frame, 1);
        // Warped to 240 heading down, then one tick.
        assert_eq!(sim.cars[1].y, 240.0 + sim.layout.car_speed);
        assert_eq!(sim.cars[0].y, sim.layout.car_speed);
        assert!(app.world().resource::<VirtualInput>().pending.is_empty());
    }

    #[test]
    fn digit_past_floor_count_leaves_cars_alone() {
        let mut app = app_with(DemoStage::LiftCars);
        press(&mut app, "6");
        app.update();

        let sim = app.world().resource::<Simulation>();
        assert_eq!(sim.commands_applied, 1);
        assert!(sim.cars.iter().all(|c| c.y == sim.layout.car_speed));
    }

    #[test]
    fn cars_keep_oscillating_across_frames() {
        let mut app = app_with(DemoStage::LiftCars);
        for _ in 0..600 {
            app.update();
        }
        let sim = app.world().resource::<Simulation>();
        assert_eq!(sim.frame, 600);
        for car in &sim.cars {
            assert!(car.y >= 0.0 && car.y <= sim.layout.car_max_y());
        }
    }
}
