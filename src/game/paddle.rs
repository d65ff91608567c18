use crate::game::{FIELD_WIDTH, PADDLE_HEIGHT, PADDLE_SPEED};

/// The player paddle. Moves horizontally only; its height above the bottom
/// edge is fixed. Input toggles the two movement flags, and `update`
/// consumes them once per tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub x: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub moving_left: bool,
    pub moving_right: bool,
}

impl Paddle {
    /// Spawns centered, with the width the difficulty preset dictates.
    pub fn new(width: f32) -> Self {
        Self {
            x: (FIELD_WIDTH - width) / 2.0,
            width,
            height: PADDLE_HEIGHT,
            speed: PADDLE_SPEED,
            moving_left: false,
            moving_right: false,
        }
    }

    pub fn press_left(&mut self) {
        self.moving_left = true;
    }

    pub fn release_left(&mut self) {
        self.moving_left = false;
    }

    pub fn press_right(&mut self) {
        self.moving_right = true;
    }

    pub fn release_right(&mut self) {
        self.moving_right = false;
    }

    pub fn center(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Applies the movement flags for one tick. The checks run in sequence,
    /// left first, with the right check reading the already-adjusted x; with
    /// both keys held mid-field the two moves cancel out, while at a wall
    /// only the unblocked direction applies.
    pub fn update(&mut self) {
        if self.moving_left && self.x > 0.0 {
            self.x -= self.speed;
        }
        if self.moving_right && self.x + self.width < FIELD_WIDTH {
            self.x += self.speed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_centered() {
        let paddle = Paddle::new(100.0);
        assert_eq!(paddle.x, 300.0);
        assert_eq!(paddle.center(), 350.0);
        assert!(!paddle.moving_left && !paddle.moving_right);
    }

    #[test]
    fn test_moves_by_speed_per_tick() {
        let mut paddle = Paddle::new(100.0);
        paddle.press_right();
        paddle.update();
        assert_eq!(paddle.x, 307.0);

        paddle.release_right();
        paddle.press_left();
        paddle.update();
        paddle.update();
        assert_eq!(paddle.x, 293.0);
    }

    #[test]
    fn test_stops_at_field_edges() {
        let mut paddle = Paddle::new(100.0);
        paddle.x = 0.0;
        paddle.press_left();
        paddle.update();
        assert_eq!(paddle.x, 0.0);

        paddle.release_left();
        paddle.x = 600.0;
        paddle.press_right();
        paddle.update();
        assert_eq!(paddle.x, 600.0);
    }

    // Pins the observed behavior when both keys are held at once: mid-field
    // the moves cancel to zero net displacement, and at the left wall the
    // blocked left move lets the right move win.
    #[test]
    fn test_both_flags_held() {
        let mut paddle = Paddle::new(100.0);
        paddle.press_left();
        paddle.press_right();
        paddle.update();
        assert_eq!(paddle.x, 300.0);

        paddle.x = 0.0;
        paddle.update();
        assert_eq!(paddle.x, 7.0);
    }
}
