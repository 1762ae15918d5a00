use std::time::Instant;

use crate::session::Session;
use crate::track::Track;

pub struct Statistics {
    top_speed: f32,
    simulation_start: Instant,
}

impl Statistics {
    pub fn new() -> Self {
        Statistics {
            top_speed: 0.0,
            simulation_start: Instant::now(),
        }
    }

    pub fn update(&mut self, session: &Session) {
        if session.speed() > self.top_speed {
            self.top_speed = session.speed();
        }
    }

    pub fn top_speed(&self) -> f32 {
        self.top_speed
    }

    pub fn print_periodic(&self, session: &Session) {
        let elapsed = self.simulation_start.elapsed().as_secs();
        println!(
            "📊 [{}s] Speed: {} | Score: {} | Laps: {} | Crashes: {}",
            elapsed,
            session.speed() as u32,
            session.score() as u32,
            session.laps(),
            session.crashes()
        );
    }

    pub fn display(&self, session: &Session, track: &Track) -> Result<(), String> {
        let elapsed_sec = self.simulation_start.elapsed().as_secs_f32();
        let distance = session.laps() as f32 * track.length() + session.position();

        println!("\n╔══════════════════════════════════════════════════╗");
        println!("║                 FINAL STATISTICS                 ║");
        println!("╠══════════════════════════════════════════════════╣");
        println!("║ Session Duration: {:>12.1}s                  ║", elapsed_sec);
        println!("║ Distance Travelled: {:>10.0} units             ║", distance);
        println!("║ Laps Completed: {:<14}                   ║", session.laps());
        println!("║ Top Speed: {:>19.1} units/s           ║", self.top_speed);
        println!("║ Crashes: {:<21}                   ║", session.crashes());
        println!("║ Final Score: {:<17}                   ║", session.score() as u32);
        println!("╚══════════════════════════════════════════════════╝");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputSnapshot;
    use crate::track::Track;

    #[test]
    fn top_speed_tracks_the_session_maximum() {
        let track = Track::build(500, 200.0, |_| 0.0, |_| None);
        let mut session = Session::new();
        session.toggle_running();
        let mut statistics = Statistics::new();

        let throttle = InputSnapshot {
            accelerate: true,
            ..InputSnapshot::default()
        };
        session.update(&track, 0.1, throttle);
        statistics.update(&session);
        let after_throttle = statistics.top_speed();
        assert!(after_throttle > 0.0);

        let braking = InputSnapshot {
            brake: true,
            ..InputSnapshot::default()
        };
        session.update(&track, 0.1, braking);
        statistics.update(&session);
        assert_eq!(statistics.top_speed(), after_throttle);
    }
}
