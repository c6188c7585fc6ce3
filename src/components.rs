use bevy::prelude::*;

/// Marks the sprite that shows the player
#[derive(Component)]
pub struct PlayerSprite;

/// Sprite for a lift shaft, by lane index
#[derive(Component, Clone, Copy)]
pub struct LiftShaftSprite(pub usize);

/// Sprite for one floor line inside a lift shaft
#[derive(Component, Clone, Copy)]
pub struct FloorLineSprite {
    pub lane: usize,
    pub floor: usize,
}

/// Sprite for a lift car, by lane index
#[derive(Component, Clone, Copy)]
pub struct LiftCarSprite(pub usize);

/// Which of the incremental demo versions is running.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemoStage {
    /// Lifts and a player that walks between lanes along the top edge (y = 0).
    /// Lift height still comes from the layout; set `lift_height` to 400 for the
    /// first version's short shafts.
    Lanes,
    /// Adds floor lines and vertical player movement.
    Floors,
    /// Adds oscillating lift cars that can be warped to a floor.
    #[default]
    LiftCars,
}

impl DemoStage {
    pub fn has_floors(self) -> bool {
        self != DemoStage::Lanes
    }

    pub fn has_lift_cars(self) -> bool {
        self == DemoStage::LiftCars
    }
}

/// Fixed screen geometry. Canvas coordinates: origin top-left, y down.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Layout {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Left edge of each lane's lift shaft
    pub lanes: Vec<f32>,
    pub lift_width: f32,
    pub lift_height: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub car_height: f32,
    /// Pixels per tick
    pub car_speed: f32,
    pub floor_count: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            screen_width: 800.0,
            screen_height: 600.0,
            lanes: vec![100.0, 350.0, 600.0],
            lift_width: 100.0,
            lift_height: 600.0,
            player_width: 50.0,
            player_height: 50.0,
            car_height: 100.0,
            car_speed: 2.0,
            floor_count: 5,
        }
    }
}

impl Layout {
    pub fn lane_count(&self) -> usize {
        self.lanes.len()
    }

    pub fn floor_height(&self) -> f32 {
        self.screen_height / self.floor_count as f32
    }

    pub fn lane_x(&self, lane: usize) -> f32 {
        self.lanes[lane]
    }

    /// Player x, centered in the lane.
    pub fn player_x(&self, lane: usize) -> f32 {
        self.lane_x(lane) + (self.lift_width - self.player_width) / 2.0
    }

    /// Player y, standing just above the floor line.
    pub fn player_y(&self, floor: usize) -> f32 {
        floor as f32 * self.floor_height() - self.player_height
    }

    pub fn floor_line_y(&self, floor: usize) -> f32 {
        floor as f32 * self.floor_height()
    }

    /// Car y after a warp to `floor`. Floor 0 sits at the bottom of the screen.
    pub fn warp_y(&self, floor: usize) -> f32 {
        self.screen_height - (floor + 1) as f32 * self.floor_height()
    }

    /// Lowest y a lift car may reach.
    pub fn car_max_y(&self) -> f32 {
        self.screen_height - self.car_height
    }

    pub fn lift_y(&self) -> f32 {
        self.screen_height - self.lift_height
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.lanes.is_empty() {
            return Err("layout needs at least one lane".to_string());
        }
        if self.floor_count == 0 {
            return Err("layout needs at least one floor".to_string());
        }
        let sizes = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("lift_width", self.lift_width),
            ("lift_height", self.lift_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("car_height", self.car_height),
            ("car_speed", self.car_speed),
        ];
        for (name, value) in sizes {
            if !(value.is_finite() && value > 0.0) {
                return Err(format!("{name} must be positive, got {value}"));
            }
        }
        for (i, x) in self.lanes.iter().enumerate() {
            if *x < 0.0 || x + self.lift_width > self.screen_width {
                return Err(format!("lane {i} at x={x} does not fit on screen"));
            }
        }
        if self.player_width > self.lift_width {
            return Err("player is wider than a lift".to_string());
        }
        if self.lift_height > self.screen_height {
            return Err("lift is taller than the screen".to_string());
        }
        if self.car_height > self.floor_height() {
            return Err(format!(
                "car_height {} exceeds floor height {}",
                self.car_height,
                self.floor_height()
            ));
        }
        Ok(())
    }
}
