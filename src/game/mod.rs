pub mod ball;
pub mod blocks;
pub mod config;
pub mod geom;
pub mod paddle;
pub mod session;

// Logical play field. The simulation runs in these units; the UI scales
// them down to whatever terminal rect it gets.
pub const FIELD_WIDTH: f32 = 700.0;
pub const FIELD_HEIGHT: f32 = 400.0;

pub const BALL_RADIUS: f32 = 10.0;

pub const PADDLE_HEIGHT: f32 = 10.0;
pub const PADDLE_SPEED: f32 = 7.0;
/// Gap between the paddle and the bottom edge of the field.
pub const PADDLE_BOTTOM_MARGIN: f32 = 10.0;

pub const BLOCK_WIDTH: f32 = 80.0;
pub const BLOCK_HEIGHT: f32 = 20.0;
pub const BLOCK_PADDING: f32 = 10.0;
pub const BLOCK_OFFSET_TOP: f32 = 50.0;
