use crate::components::Layout;
use crate::lift::LiftCar;

/// The frog. Moves one lane or one floor per key press.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub lane: usize,
    pub floor: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Player {
    /// Middle lane, bottom floor.
    pub fn spawn(layout: &Layout) -> Self {
        let lane = layout.lane_count() / 2;
        let floor = layout.floor_count - 1;
        Self {
            lane,
            floor,
            x: layout.player_x(lane),
            y: layout.player_y(floor),
            width: layout.player_width,
            height: layout.player_height,
        }
    }

    pub fn move_left(&mut self, layout: &Layout) -> bool {
        if self.lane == 0 {
            return false;
        }
        self.lane -= 1;
        self.x = layout.player_x(self.lane);
        true
    }

    pub fn move_right(&mut self, layout: &Layout) -> bool {
        if self.lane + 1 >= layout.lane_count() {
            return false;
        }
        self.lane += 1;
        self.x = layout.player_x(self.lane);
        true
    }

    pub fn move_up(&mut self, layout: &Layout) -> bool {
        if self.floor == 0 {
            return false;
        }
        self.floor -= 1;
        self.y = layout.player_y(self.floor);
        true
    }

    pub fn move_down(&mut self, layout: &Layout) -> bool {
        if self.floor + 1 >= layout.floor_count {
            return false;
        }
        self.floor += 1;
        self.y = layout.player_y(self.floor);
        true
    }

    /// Whether the player's x lies within the car's horizontal extent, edges included.
    pub fn is_in_same_lane(&self, car: &LiftCar) -> bool {
        self.x >= car.x && self.x <= car.x + car.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Layout {
        Layout::default()
    }

    #[test]
    fn spawns_in_middle_lane_on_bottom_floor() {
        let layout = layout();
        let player = Player::spawn(&layout);
        assert_eq!((player.lane, player.floor), (1, 4));
        assert_eq!(player.x, layout.player_x(1));
        assert_eq!(player.y, layout.player_y(4));
    }

    #[test]
    fn horizontal_moves_clamp_to_lane_range() {
        let layout = layout();
        for start in 0..3 {
            let mut player = Player::spawn(&layout);
            player.lane = start;
            player.move_left(&layout);
            assert_eq!(player.lane, start.saturating_sub(1));

            player.lane = start;
            player.move_right(&layout);
            assert_eq!(player.lane, (start + 1).min(2));
        }

        let mut player = Player::spawn(&layout);
        assert!(player.move_left(&layout));
        assert!(!player.move_left(&layout));
        assert!(!player.move_left(&layout));
        assert_eq!(player.lane, 0);
        assert_eq!(player.x, 100.0 + 25.0);
    }

    #[test]
    fn vertical_moves_clamp_to_floor_range() {
        let layout = layout();
        let mut player = Player::spawn(&layout);
        assert!(!player.move_down(&layout));
        assert_eq!(player.floor, 4);

        for expected in (0..4).rev() {
            assert!(player.move_up(&layout));
            assert_eq!(player.floor, expected);
        }
        assert!(!player.move_up(&layout));
        assert_eq!(player.floor, 0);
        assert_eq!(player.y, -layout.player_height);
    }

    #[test]
    fn pixel_position_follows_lane_and_floor() {
        let layout = layout();
        let mut player = Player::spawn(&layout);
        player.move_right(&layout);
        player.move_up(&layout);
        player.move_up(&layout);
        assert_eq!(player.x, layout.lanes[2] + (layout.lift_width - layout.player_width) / 2.0);
        assert_eq!(player.y, 2.0 * layout.floor_height() - layout.player_height);
    }

    #[test]
    fn same_lane_is_inclusive_interval_test() {
        let layout = layout();
        let car = LiftCar::new(0, &layout);
        let mut player = Player::spawn(&layout);

        player.x = 100.0;
        assert!(player.is_in_same_lane(&car));
        player.x = 200.0;
        assert!(player.is_in_same_lane(&car));
        player.x = 250.0;
        assert!(!player.is_in_same_lane(&car));
    }
}
