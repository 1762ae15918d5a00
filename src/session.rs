//! Vehicle/session state machine: longitudinal position and speed, lateral
//! offset, score and the Running/Stopped lifecycle. One update per tick,
//! driven by an immutable input snapshot.

use crate::constants::{
    ACCELERATION, BRAKING, COLLISION_LOOKAHEAD, COLLISION_THRESHOLD, MAX_SPEED,
    MAX_TICK_SECONDS, SCORE_REWARD_RATE, STEER_RATE,
};
use crate::input::InputSnapshot;
use crate::track::Track;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Stopped,
}

#[derive(Debug)]
pub struct Session {
    position: f32,
    speed: f32,
    player_x: f32,
    score: f32,
    state: RunState,
    crashes: u32,
    laps: u32,
}

impl Session {
    pub fn new() -> Self {
        Session {
            position: 0.0,
            speed: 0.0,
            player_x: 0.0,
            score: 0.0,
            state: RunState::Stopped,
            crashes: 0,
            laps: 0,
        }
    }

    /// Edge-triggered run/pause flip. Also how the player gets back on the
    /// road after a crash.
    pub fn toggle_running(&mut self) {
        self.state = match self.state {
            RunState::Running => RunState::Stopped,
            RunState::Stopped => RunState::Running,
        };
    }

    /// Advances the session by one tick. While stopped, time does not pass:
    /// steering and throttle are accepted but produce no motion.
    pub fn update(&mut self, track: &Track, dt: f32, input: InputSnapshot) {
        if self.state != RunState::Running {
            return;
        }
        let dt = dt.clamp(0.0, MAX_TICK_SECONDS);

        // Both directions may be held at once; they simply cancel out.
        if input.steer_left {
            self.player_x -= STEER_RATE * dt;
        }
        if input.steer_right {
            self.player_x += STEER_RATE * dt;
        }

        if input.accelerate {
            self.speed += ACCELERATION * dt;
        }
        if input.brake {
            self.speed -= BRAKING * dt;
        }
        // Clamped every tick whether or not a key was held: releasing the
        // throttle holds speed rather than coasting it down.
        self.speed = self.speed.clamp(0.0, MAX_SPEED);

        self.position += dt * self.speed;
        self.score += dt * self.speed * SCORE_REWARD_RATE;
        if self.position >= track.length() {
            self.position -= track.length();
            self.laps += 1;
        }

        let ahead = track.find_segment(self.position + COLLISION_LOOKAHEAD);
        if let Some(obstacle) = ahead.obstacle {
            if (self.player_x - obstacle.offset).abs() < COLLISION_THRESHOLD {
                self.state = RunState::Stopped;
                self.speed = 0.0;
                self.crashes += 1;
            }
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn player_x(&self) -> f32 {
        self.player_x
    }

    pub fn score(&self) -> f32 {
        self.score
    }

    pub fn crashes(&self) -> u32 {
        self.crashes
    }

    pub fn laps(&self) -> u32 {
        self.laps
    }
}
