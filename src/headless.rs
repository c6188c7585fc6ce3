//! Windowless play: key identifiers arrive as stdin lines.

use std::io::BufRead;

use bevy::prelude::*;
use crossbeam_channel::{Receiver, Sender};

use crate::input::VirtualInput;
use crate::simulation::{Simulation, SimulationSet};

#[derive(Resource)]
pub struct StdinKeys(pub Receiver<String>);

/// Read lines until stdin closes. Runs on its own thread.
pub fn forward_lines(reader: impl BufRead, tx: Sender<String>) {
    for line in reader.lines() {
        let Ok(line) = line else {
            break;
        };
        let key = line.trim();
        if key.is_empty() {
            continue;
        }
        if tx.send(key.to_string()).is_err() {
            break;
        }
    }
}

pub struct HeadlessPlugin;

impl Plugin for HeadlessPlugin {
    fn build(&self, app: &mut App) {
        let (tx, rx) = crossbeam_channel::unbounded();
        std::thread::spawn(move || forward_lines(std::io::stdin().lock(), tx));
        add_stdin_systems(app, rx);
    }
}

fn add_stdin_systems(app: &mut App, rx: Receiver<String>) {
    app.insert_resource(StdinKeys(rx))
        .insert_resource(StateReports::default())
        .add_systems(Update, stdin_to_virtual.before(SimulationSet::Input))
        .add_systems(
            Update,
            report_state
                .after(SimulationSet::Input)
                .before(SimulationSet::Advance),
        );
}

/// State lines logged so far in headless mode.
#[derive(Resource, Default, Debug)]
pub struct StateReports {
    pub count: u64,
    pub last: String,
}

fn stdin_to_virtual(keys: Res<StdinKeys>, mut vinput: ResMut<VirtualInput>, sim: Res<Simulation>) {
    for key in keys.0.try_iter() {
        if !vinput.push_key(&key) {
            warn!("[Liftwarp headless] Unbound key {:?}", key);
            continue;
        }
        info!(
            "[Liftwarp headless] frame {} key {} (player lane {} floor {})",
            sim.frame, key, sim.player.lane, sim.player.floor
        );
    }
}

/// One-line summary of the current state, logged after commands apply.
pub fn describe(sim: &Simulation) -> String {
    let cars: Vec<String> = sim
        .cars
        .iter()
        .map(|c| format!("{}:{:.0}", c.lane, c.y))
        .collect();
    format!(
        "player lane={} floor={} at ({:.0}, {:.0}) cars=[{}]",
        sim.player.lane,
        sim.player.floor,
        sim.player.x,
        sim.player.y,
        cars.join(" ")
    )
}

/// Log the state on the first frame and after every frame that handled commands,
/// whether or not they changed anything.
fn report_state(
    sim: Res<Simulation>,
    mut reports: ResMut<StateReports>,
    mut seen: Local<Option<u64>>,
) {
    if *seen == Some(sim.commands_applied) {
        return;
    }
    *seen = Some(sim.commands_applied);
    reports.last = describe(&sim);
    reports.count += 1;
    info!("[Liftwarp headless] {}", reports.last);
}
