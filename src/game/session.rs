//! One playthrough of the game: the per-tick simulation step and the
//! collision and scoring rules.

use std::f32::consts::FRAC_PI_3;

use crate::game::ball::Ball;
use crate::game::blocks::BlockGrid;
use crate::game::config::Difficulty;
use crate::game::geom::Vec2;
use crate::game::paddle::Paddle;
use crate::game::{FIELD_HEIGHT, FIELD_WIDTH, PADDLE_BOTTOM_MARGIN};

/// Maximum deflection from vertical a paddle bounce can produce.
const MAX_BOUNCE_ANGLE: f32 = FRAC_PI_3;

/// How a session ended. Set at most once; the frame driver stops ticking
/// as soon as it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    GameOver,
    Cleared,
}

/// Everything one game owns: ball, paddle, block grid, score and lives.
/// Created when the countdown ends, dropped when the player restarts.
#[derive(Debug, Clone)]
pub struct Session {
    pub difficulty: Difficulty,
    pub ball: Ball,
    pub paddle: Paddle,
    pub grid: BlockGrid,
    pub score: u32,
    pub lives: u32,
    ball_speed: f32,
    outcome: Option<Outcome>,
}

impl Session {
    pub fn new(difficulty: Difficulty) -> Self {
        let cfg = difficulty.config();
        Self {
            difficulty,
            ball: Ball::new(cfg.ball_speed),
            paddle: Paddle::new(cfg.paddle_width),
            grid: BlockGrid::new(cfg.rows, cfg.columns, FIELD_WIDTH),
            score: 0,
            lives: cfg.lives,
            ball_speed: cfg.ball_speed,
            outcome: None,
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// The frame driver keeps scheduling ticks while this holds.
    pub fn is_running(&self) -> bool {
        self.outcome.is_none()
    }

    /// One simulation step: ball motion, paddle motion, then collision
    /// resolution, in that order.
    pub fn tick(&mut self) {
        self.move_ball();
        self.paddle.update();
        self.check_paddle_collision();
        self.check_block_collisions();
    }

    fn move_ball(&mut self) {
        self.ball.pos += self.ball.vel;

        // Side and top walls reflect by negating a velocity component. The
        // position is not clamped back in bounds; the ball may sit outside
        // for a frame until the reflected step brings it back.
        if self.ball.pos.x + self.ball.radius > FIELD_WIDTH
            || self.ball.pos.x - self.ball.radius < 0.0
        {
            self.ball.vel.x = -self.ball.vel.x;
        }
        if self.ball.pos.y - self.ball.radius < 0.0 {
            self.ball.vel.y = -self.ball.vel.y;
        }

        // The bottom edge is not a bounce surface. Crossing it costs a life
        // and either ends the game or respawns the ball; grid and score
        // carry on unchanged.
        if self.ball.pos.y + self.ball.radius > FIELD_HEIGHT {
            self.lives = self.lives.saturating_sub(1);
            if self.lives == 0 {
                self.outcome = Some(Outcome::GameOver);
            } else {
                self.ball.reset(self.ball_speed);
            }
        }
    }

    /// A paddle hit re-angles the ball instead of mirroring it: the hit
    /// offset from the paddle center, normalized to [-1, 1], maps to up to
    /// 60 degrees off vertical, and both velocity components are re-derived
    /// from the speed scalar. Triggers again on consecutive ticks if the
    /// ball lingers in the paddle band.
    fn check_paddle_collision(&mut self) {
        let band_top = FIELD_HEIGHT - self.paddle.height - PADDLE_BOTTOM_MARGIN;
        let hit = self.ball.pos.y + self.ball.radius > band_top
            && self.ball.pos.x > self.paddle.x
            && self.ball.pos.x < self.paddle.x + self.paddle.width;
        if hit {
            let half_width = self.paddle.width / 2.0;
            let offset = (self.ball.pos.x - self.paddle.center()) / half_width;
            let angle = offset * MAX_BOUNCE_ANGLE;
            self.ball.vel = Vec2::new(
                self.ball_speed * angle.sin(),
                -self.ball_speed * angle.cos(),
            );
        }
    }

    /// Blocks only flip the vertical velocity; steering comes from the
    /// paddle alone. Walks rows then columns in ascending order and
    /// processes every block whose rectangle strictly contains the ball
    /// center this tick, without an early exit.
    fn check_block_collisions(&mut self) {
        let pos = self.ball.pos;
        let mut hit_any = false;
        for block in self.grid.iter_mut() {
            if !block.hit && block.bounds().contains(pos) {
                self.ball.vel.y = -self.ball.vel.y;
                block.hit = true;
                self.score += 1;
                hit_any = true;
            }
        }
        // Clearing is only reachable through a block hit, so the check and
        // the final hit land in the same tick.
        if hit_any && self.grid.all_hit() {
            self.outcome = Some(Outcome::Cleared);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::BALL_RADIUS;

    const EPS: f32 = 1e-4;

    fn normal_session() -> Session {
        Session::new(Difficulty::Normal)
    }

    #[test]
    fn test_new_session_matches_preset() {
        let session = normal_session();
        assert_eq!(session.score, 0);
        assert_eq!(session.lives, 3);
        assert_eq!(session.grid.len(), 40);
        assert_eq!(session.paddle.width, 100.0);
        assert!(session.is_running());
        assert_eq!(session.outcome(), None);
    }

    #[test]
    fn test_left_wall_reflects_horizontal_velocity() {
        let mut session = normal_session();
        session.ball.pos = Vec2::new(BALL_RADIUS - 1.0, 200.0);
        session.ball.vel = Vec2::new(-3.0, 0.0);
        session.tick();
        assert_eq!(session.ball.vel.x, 3.0);
    }

    #[test]
    fn test_right_wall_reflects_horizontal_velocity() {
        let mut session = normal_session();
        session.ball.pos = Vec2::new(FIELD_WIDTH - BALL_RADIUS + 1.0, 200.0);
        session.ball.vel = Vec2::new(3.0, 0.0);
        session.tick();
        assert_eq!(session.ball.vel.x, -3.0);
    }

    #[test]
    fn test_top_wall_reflects_vertical_velocity() {
        let mut session = normal_session();
        session.ball.pos = Vec2::new(350.0, BALL_RADIUS - 1.0);
        session.ball.vel = Vec2::new(0.0, -3.0);
        session.tick();
        assert_eq!(session.ball.vel.y, 3.0);
    }

    #[test]
    fn test_wall_reflection_does_not_clamp_position() {
        let mut session = normal_session();
        session.ball.pos = Vec2::new(BALL_RADIUS - 1.0, 200.0);
        session.ball.vel = Vec2::new(-3.0, 0.0);
        session.tick();
        // Still outside the left boundary this frame; only the sign flipped
        assert!(session.ball.pos.x - session.ball.radius < 0.0);
    }

    #[test]
    fn test_bottom_loss_costs_a_life_and_respawns_the_ball() {
        let mut session = normal_session();
        session.score = 7;
        session.ball.pos = Vec2::new(100.0, FIELD_HEIGHT - 5.0);
        session.ball.vel = Vec2::new(0.0, 3.0);
        session.tick();

        assert_eq!(session.lives, 2);
        assert_eq!(session.score, 7);
        assert_eq!(session.ball.pos, Vec2::new(350.0, 370.0));
        assert_eq!(session.ball.vel, Vec2::new(3.0, -3.0));
        assert!(session.is_running());
    }

    #[test]
    fn test_last_life_lost_ends_the_game() {
        let mut session = Session::new(Difficulty::Hard);
        assert_eq!(session.lives, 1);
        session.score = 12;
        session.ball.pos = Vec2::new(100.0, FIELD_HEIGHT - 5.0);
        session.ball.vel = Vec2::new(0.0, 3.0);
        session.tick();

        assert_eq!(session.lives, 0);
        assert_eq!(session.outcome(), Some(Outcome::GameOver));
        assert!(!session.is_running());
        // Final score survives into the result screen
        assert_eq!(session.score, 12);
    }

    #[test]
    fn test_paddle_bounce_dead_center_goes_straight_up() {
        let mut session = normal_session();
        // One tick ahead of the paddle band, dead on the paddle center
        session.ball.pos = Vec2::new(347.0, 378.0);
        session.ball.vel = Vec2::new(3.0, 3.0);
        session.tick();

        assert!(session.ball.vel.x.abs() < EPS);
        assert!((session.ball.vel.y + 3.0).abs() < EPS);
    }

    #[test]
    fn test_paddle_bounce_near_edge_deflects_hard() {
        let mut session = normal_session();
        // Lands at x = 399, one unit inside the paddle's right edge
        session.ball.pos = Vec2::new(396.0, 378.0);
        session.ball.vel = Vec2::new(3.0, 3.0);
        session.tick();

        let offset = (399.0 - 350.0) / 50.0;
        let angle = offset * MAX_BOUNCE_ANGLE;
        assert!((session.ball.vel.x - 3.0 * angle.sin()).abs() < EPS);
        assert!((session.ball.vel.y + 3.0 * angle.cos()).abs() < EPS);
        assert!(session.ball.vel.x > 2.0, "steep deflection to the right");
    }

    #[test]
    fn test_paddle_bounce_restores_speed_magnitude() {
        let mut session = normal_session();
        session.ball.pos = Vec2::new(320.0, 378.0);
        session.ball.vel = Vec2::new(3.0, 3.0);
        session.tick();
        assert!((session.ball.vel.length() - 3.0).abs() < EPS);
    }

    #[test]
    fn test_ball_outside_paddle_passes_the_band() {
        let mut session = normal_session();
        // In the paddle band but to the left of the paddle
        session.ball.pos = Vec2::new(100.0, 378.0);
        session.ball.vel = Vec2::new(0.0, 3.0);
        session.tick();
        assert_eq!(session.ball.vel.y, 3.0);
    }

    #[test]
    fn test_block_hit_flips_vertical_velocity_and_scores() {
        let mut session = normal_session();
        // First block of the normal grid covers (-5..75, 50..70)
        session.ball.pos = Vec2::new(27.0, 57.0);
        session.ball.vel = Vec2::new(3.0, 3.0);
        session.tick();

        assert_eq!(session.ball.vel, Vec2::new(3.0, -3.0));
        assert_eq!(session.score, 1);
        assert_eq!(session.grid.remaining(), 39);
        assert!(session.grid.iter().next().unwrap().hit);
        assert!(session.is_running());
    }

    #[test]
    fn test_hit_blocks_are_ignored_afterwards() {
        let mut session = normal_session();
        for block in session.grid.iter_mut() {
            block.hit = true;
        }
        session.score = 39;
        session.ball.pos = Vec2::new(27.0, 57.0);
        session.ball.vel = Vec2::new(3.0, 3.0);
        // all_hit is only checked off the back of a fresh hit, so a dead
        // grid does not re-trigger anything
        session.check_block_collisions();
        assert_eq!(session.score, 39);
        assert_eq!(session.outcome(), None);
    }

    #[test]
    fn test_clearing_the_last_block_ends_the_game_same_tick() {
        let mut session = Session::new(Difficulty::Easy);
        let total = session.grid.len() as u32;
        // Leave only the first block standing
        for block in session.grid.iter_mut().skip(1) {
            block.hit = true;
        }
        session.score = total - 1;

        // Easy grid starts at x = 130; aim for the first block's interior
        session.ball.pos = Vec2::new(157.0, 57.0);
        session.ball.vel = Vec2::new(3.0, 3.0);
        session.tick();

        assert_eq!(session.score, total);
        assert!(session.grid.all_hit());
        assert_eq!(session.outcome(), Some(Outcome::Cleared));
        assert!(!session.is_running());
    }

    #[test]
    fn test_paddle_flags_move_paddle_during_tick() {
        let mut session = normal_session();
        session.paddle.press_left();
        session.tick();
        assert_eq!(session.paddle.x, 293.0);
        session.paddle.release_left();
        session.tick();
        assert_eq!(session.paddle.x, 293.0);
    }
}
