use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::input::ButtonState;
use bevy::prelude::*;

/// What a key press asks the game to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputCommand {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    /// Zero-based floor index from a digit key. Any non-zero digit parses;
    /// `LiftCar::warp_to_floor` drops floors at or above `floor_count`.
    Warp(usize),
}

impl InputCommand {
    /// Map a key identifier ("ArrowLeft", "3", ...) to a command.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::MoveLeft),
            "ArrowRight" => Some(Self::MoveRight),
            "ArrowUp" => Some(Self::MoveUp),
            "ArrowDown" => Some(Self::MoveDown),
            _ => {
                let mut chars = key.chars();
                let digit = chars.next()?.to_digit(10)?;
                if chars.next().is_some() || digit == 0 {
                    return None;
                }
                Some(Self::Warp(digit as usize - 1))
            }
        }
    }
}

/// Abstraction layer between raw input and the simulation.
/// The keyboard (windowed) and stdin (headless) both write here.
#[derive(Resource, Default, Clone)]
pub struct VirtualInput {
    pub pending: Vec<InputCommand>,
}

impl VirtualInput {
    /// Queue the command for a key identifier. Unbound keys are dropped.
    pub fn push_key(&mut self, key: &str) -> bool {
        match InputCommand::from_key(key) {
            Some(cmd) => {
                self.pending.push(cmd);
                true
            }
            None => false,
        }
    }

    pub fn drain(&mut self) -> Vec<InputCommand> {
        std::mem::take(&mut self.pending)
    }
}

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(VirtualInput::default()).add_systems(
            PreUpdate,
            keyboard_to_virtual.run_if(resource_exists::<Events<KeyboardInput>>),
        );
    }
}

/// Identifier for a logical key, in the same spelling browsers use.
fn key_identifier(key: &Key) -> Option<String> {
    match key {
        Key::ArrowLeft => Some("ArrowLeft".into()),
        Key::ArrowRight => Some("ArrowRight".into()),
        Key::ArrowUp => Some("ArrowUp".into()),
        Key::ArrowDown => Some("ArrowDown".into()),
        Key::Character(c) => Some(c.to_string()),
        _ => None,
    }
}

/// Every key-down, repeats included, becomes a queued command.
fn keyboard_to_virtual(mut events: EventReader<KeyboardInput>, mut vinput: ResMut<VirtualInput>) {
    for event in events.read() {
        if event.state != ButtonState::Pressed {
            continue;
        }
        if let Some(id) = key_identifier(&event.logical_key) {
            vinput.push_key(&id);
        }
    }
}
