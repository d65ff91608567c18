use crate::game::geom::Vec2;
use crate::game::{BALL_RADIUS, FIELD_HEIGHT, FIELD_WIDTH};

/// The ball. Velocity magnitude always equals the session's speed scalar;
/// a paddle bounce re-derives both components from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Spawns centered just above the paddle, heading up and to the right.
    /// Used at game start and again after every lost life.
    pub fn new(speed: f32) -> Self {
        Self {
            pos: Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT - 30.0),
            vel: Vec2::new(speed, -speed),
            radius: BALL_RADIUS,
        }
    }

    pub fn reset(&mut self, speed: f32) {
        *self = Ball::new(speed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_position_and_velocity() {
        let ball = Ball::new(3.0);
        assert_eq!(ball.pos, Vec2::new(350.0, 370.0));
        assert_eq!(ball.vel, Vec2::new(3.0, -3.0));
        assert_eq!(ball.radius, 10.0);
    }

    #[test]
    fn test_reset_restores_spawn_state() {
        let mut ball = Ball::new(3.0);
        ball.pos = Vec2::new(12.0, 34.0);
        ball.vel = Vec2::new(-3.0, 3.0);
        ball.reset(3.0);
        assert_eq!(ball, Ball::new(3.0));
    }
}
