// src/constants.rs - road, camera and drive-model tuning

// Road geometry (world units)
pub const ROAD_WIDTH: f32 = 2000.0;
pub const SEGMENT_LENGTH: f32 = 200.0;
pub const SEGMENT_COUNT: usize = 500;
pub const RUMBLE_LENGTH: usize = 3; // segments per color band
pub const LANES: usize = 3;

// Camera: depth is 1 / tan(fov / 2) for a 90 degree field of view
pub const DRAW_DISTANCE: usize = 300; // segments walked per frame
pub const CAMERA_HEIGHT: f32 = 1500.0;
pub const CAMERA_DEPTH: f32 = 1.0;

// Default curve shape: amplitude-2 sine, one full bend every ~30 segments
pub const CURVE_AMPLITUDE: f32 = 2.0;
pub const CURVE_PERIOD: f32 = 30.0;

// Obstacle-free opening stretch, then one obstacle per spacing interval
pub const OBSTACLE_WARMUP: usize = 50;
pub const OBSTACLE_SPACING: usize = 40;

pub const MAX_SPEED: f32 = 2400.0;
pub const ACCELERATION: f32 = 480.0;
pub const BRAKING: f32 = 1200.0;
pub const STEER_RATE: f32 = 2.0; // road half-widths per second
pub const SCORE_REWARD_RATE: f32 = 0.01;

// Collision is checked ahead of the car so a fast tick cannot step
// over an obstacle between two updates. Threshold is in half-widths.
pub const COLLISION_LOOKAHEAD: f32 = 400.0;
pub const COLLISION_THRESHOLD: f32 = 0.1;

// Upper bound on a single tick; covers the first frame and stalls
pub const MAX_TICK_SECONDS: f32 = 0.25;

// Screen pixels of car movement per unit of lateral player offset
pub const PLAYER_PIXEL_SCALE: f32 = 50.0;
