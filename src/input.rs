use sdl2::event::Event;
use sdl2::keyboard::Keycode;

/// Immutable copy of the held driving controls, captured once per tick and
/// handed to the session update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub steer_left: bool,
    pub steer_right: bool,
    pub accelerate: bool,
    pub brake: bool,
}

// Actions triggered by key edges, as opposed to the held state in the snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    ToggleRunning,
    ShowStatistics,
    Exit,
}

pub struct InputHandler {
    steer_left: bool,
    steer_right: bool,
    accelerate: bool,
    brake: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        InputHandler {
            steer_left: false,
            steer_right: false,
            accelerate: false,
            brake: false,
        }
    }

    // Tracks held keys and translates edge-triggered keys into actions.
    // Key repeats are ignored so holding Space cannot bounce run/pause.
    pub fn process_event(&mut self, event: &Event) -> InputAction {
        match event {
            Event::KeyDown {
                keycode: Some(keycode),
                repeat,
                ..
            } => match keycode {
                Keycode::Left => {
                    self.steer_left = true;
                    InputAction::None
                }
                Keycode::Right => {
                    self.steer_right = true;
                    InputAction::None
                }
                Keycode::Up => {
                    self.accelerate = true;
                    InputAction::None
                }
                Keycode::Down => {
                    self.brake = true;
                    InputAction::None
                }
                Keycode::Space => {
                    if *repeat {
                        InputAction::None
                    } else {
                        InputAction::ToggleRunning
                    }
                }
                Keycode::S => InputAction::ShowStatistics,
                Keycode::Escape => InputAction::Exit,
                _ => InputAction::None,
            },
            Event::KeyUp {
                keycode: Some(keycode),
                ..
            } => {
                match keycode {
                    Keycode::Left => self.steer_left = false,
                    Keycode::Right => self.steer_right = false,
                    Keycode::Up => self.accelerate = false,
                    Keycode::Down => self.brake = false,
                    _ => {}
                }
                InputAction::None
            }
            _ => InputAction::None,
        }
    }

    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            steer_left: self.steer_left,
            steer_right: self.steer_right,
            accelerate: self.accelerate,
            brake: self.brake,
        }
    }
}

// Helper function to print control instructions
pub fn print_controls() {
    println!("╔══════════════════════════════════════╗");
    println!("║            GAME CONTROLS             ║");
    println!("╠══════════════════════════════════════╣");
    println!("║ ← Arrow Left  │ Steer left           ║");
    println!("║ → Arrow Right │ Steer right          ║");
    println!("║ ↑ Arrow Up    │ Accelerate           ║");
    println!("║ ↓ Arrow Down  │ Brake                ║");
    println!("║ Space         │ Start / pause        ║");
    println!("║ S             │ Show statistics      ║");
    println!("║ Esc           │ Exit                 ║");
    println!("╚══════════════════════════════════════╝");
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::keyboard::Mod;

    fn key_down(keycode: Keycode, repeat: bool) -> Event {
        Event::KeyDown {
            timestamp: 0,
            window_id: 0,
            keycode: Some(keycode),
            scancode: None,
            keymod: Mod::empty(),
            repeat,
        }
    }

    fn key_up(keycode: Keycode) -> Event {
        Event::KeyUp {
            timestamp: 0,
            window_id: 0,
            keycode: Some(keycode),
            scancode: None,
            keymod: Mod::empty(),
            repeat: false,
        }
    }

    #[test]
    fn snapshot_reflects_held_keys() {
        let mut handler = InputHandler::new();
        handler.process_event(&key_down(Keycode::Left, false));
        handler.process_event(&key_down(Keycode::Up, false));

        let snapshot = handler.snapshot();
        assert!(snapshot.steer_left);
        assert!(snapshot.accelerate);
        assert!(!snapshot.steer_right);
        assert!(!snapshot.brake);
    }

    #[test]
    fn releasing_a_key_clears_its_held_state() {
        let mut handler = InputHandler::new();
        handler.process_event(&key_down(Keycode::Right, false));
        handler.process_event(&key_up(Keycode::Right));

        assert_eq!(handler.snapshot(), InputSnapshot::default());
    }

    #[test]
    fn run_toggle_fires_only_on_the_key_edge() {
        let mut handler = InputHandler::new();
        assert_eq!(
            handler.process_event(&key_down(Keycode::Space, false)),
            InputAction::ToggleRunning
        );
        assert_eq!(
            handler.process_event(&key_down(Keycode::Space, true)),
            InputAction::None
        );
    }
}
