use crate::components::Layout;

/// A horizontal line drawn across a lift shaft.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Floor {
    pub y: f32,
}

/// A static shaft at one lane.
#[derive(Clone, Debug, PartialEq)]
pub struct Lift {
    pub lane: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub floors: Vec<Floor>,
}

impl Lift {
    pub fn new(lane: usize, layout: &Layout, with_floors: bool) -> Self {
        let floors = if with_floors {
            (0..layout.floor_count)
                .map(|i| Floor {
                    y: layout.floor_line_y(i),
                })
                .collect()
        } else {
            Vec::new()
        };
        Self {
            lane,
            x: layout.lane_x(lane),
            y: layout.lift_y(),
            width: layout.lift_width,
            height: layout.lift_height,
            floors,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heading {
    Up,
    Down,
}

impl Heading {
    /// Sign of the y step. Canvas y grows downward.
    pub fn sign(self) -> f32 {
        match self {
            Heading::Up => -1.0,
            Heading::Down => 1.0,
        }
    }
}

/// The cabin moving inside a lift shaft.
#[derive(Clone, Debug, PartialEq)]
pub struct LiftCar {
    pub lane: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub heading: Heading,
}

impl LiftCar {
    pub fn new(lane: usize, layout: &Layout) -> Self {
        Self {
            lane,
            x: layout.lane_x(lane),
            y: 0.0,
            width: layout.lift_width,
            height: layout.car_height,
            speed: layout.car_speed,
            heading: Heading::Down,
        }
    }

    /// One tick of oscillation. The heading flips on the tick that reaches a boundary.
    pub fn update(&mut self, layout: &Layout) {
        let max_y = layout.car_max_y();
        self.y += self.speed * self.heading.sign();
        if self.y <= 0.0 {
            self.y = 0.0;
            self.heading = Heading::Down;
        } else if self.y >= max_y {
            self.y = max_y;
            self.heading = Heading::Up;
        }
    }

    /// Jump straight to `floor`, keeping heading and speed. Out-of-range floors are ignored.
    pub fn warp_to_floor(&mut self, floor: usize, layout: &Layout) -> bool {
        if floor >= layout.floor_count {
            return false;
        }
        self.y = layout.warp_y(floor);
        true
    }
}
