use sdl2::event::Event;
use std::time::{Duration, Instant};

mod camera;
mod constants;
mod hud;
mod input;
mod renderer;
mod scene;
mod session;
mod statistics;
mod track;

use camera::Viewport;
use input::{print_controls, InputAction, InputHandler};
use renderer::Renderer;
use scene::SceneCompositor;
use session::Session;
use statistics::Statistics;
use track::Track;

pub const WINDOW_WIDTH: u32 = 1024;
pub const WINDOW_HEIGHT: u32 = 768;
const FPS: u32 = 60;

fn main() -> Result<(), String> {
    println!("=== Road Rush - Pseudo-3D Pursuit Racer ===\n");

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let ttf_context = sdl2::ttf::init().map_err(|e| e.to_string())?;

    let window = video_subsystem
        .window("Road Rush", WINDOW_WIDTH, WINDOW_HEIGHT)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window
        .into_canvas()
        .accelerated()
        .present_vsync()
        .build()
        .map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let renderer = Renderer::new(&texture_creator)?;

    // The HUD falls back to gauge-only rendering without a font.
    let font = match ttf_context.load_font("assets/fonts/font.ttf", 18) {
        Ok(font) => Some(font),
        Err(e) => {
            println!("Warning: Could not load HUD font: {}", e);
            None
        }
    };

    let track = Track::standard();
    let mut session = Session::new();
    let mut compositor = SceneCompositor::new(Viewport {
        width: WINDOW_WIDTH,
        height: WINDOW_HEIGHT,
    });
    let mut input = InputHandler::new();
    let mut statistics = Statistics::new();

    let mut event_pump = sdl_context.event_pump()?;
    let mut running = true;
    let mut last_frame = Instant::now();
    let mut frame_count = 0u64;

    print_controls();
    println!(
        "\nTrack built: {} segments, {:.0} world units per lap.",
        track.segment_count(),
        track.length()
    );
    println!("Press Space to start driving!\n");

    while running {
        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;
        frame_count += 1;

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => running = false,
                _ => match input.process_event(&event) {
                    InputAction::ToggleRunning => {
                        session.toggle_running();
                        println!(
                            "🏁 Session: {}",
                            if session.is_running() { "running" } else { "paused" }
                        );
                    }
                    InputAction::ShowStatistics => statistics.print_periodic(&session),
                    InputAction::Exit => running = false,
                    InputAction::None => {}
                },
            }
        }

        let crashes_before = session.crashes();
        session.update(&track, dt, input.snapshot());
        if session.crashes() > crashes_before {
            println!("💥 Crashed! Press Space to get back on the road.");
        }
        statistics.update(&session);

        let commands = compositor.compose(&track, session.position(), session.player_x());
        renderer.render(&mut canvas, commands, session.player_x())?;
        hud::render_readout(&mut canvas, font.as_ref(), &session)?;
        canvas.present();

        if session.is_running() && frame_count % (FPS as u64 * 5) == 0 {
            statistics.print_periodic(&session);
        }

        let frame_time = now.elapsed();
        if frame_time < Duration::from_millis(1000 / FPS as u64) {
            std::thread::sleep(Duration::from_millis(1000 / FPS as u64) - frame_time);
        }
    }

    statistics.display(&session, &track)?;
    Ok(())
}
