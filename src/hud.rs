// src/hud.rs - on-screen speed/score readout; text when a font is
// available, plain gauge rectangles otherwise

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, TextureQuery};
use sdl2::ttf::Font;
use sdl2::video::Window;

use crate::constants::MAX_SPEED;
use crate::session::{RunState, Session};

const PANEL_X: i32 = 10;
const PANEL_Y: i32 = 10;
const PANEL_WIDTH: u32 = 280;
const PANEL_HEIGHT: u32 = 70;
const GAUGE_WIDTH: u32 = 240;

pub fn render_readout(
    canvas: &mut Canvas<Window>,
    font: Option<&Font>,
    session: &Session,
) -> Result<(), String> {
    canvas.set_draw_color(Color::RGBA(0, 0, 0, 200));
    canvas.fill_rect(Rect::new(PANEL_X, PANEL_Y, PANEL_WIDTH, PANEL_HEIGHT))?;
    canvas.set_draw_color(Color::RGB(255, 255, 255));
    canvas.draw_rect(Rect::new(PANEL_X, PANEL_Y, PANEL_WIDTH, PANEL_HEIGHT))?;

    // Speed gauge, filled proportionally to the clamped speed range.
    let fill = (session.speed() / MAX_SPEED * GAUGE_WIDTH as f32) as u32;
    canvas.set_draw_color(Color::RGB(80, 80, 80));
    canvas.fill_rect(Rect::new(PANEL_X + 10, PANEL_Y + 44, GAUGE_WIDTH, 14))?;
    if fill > 0 {
        canvas.set_draw_color(Color::RGB(255, 150, 0));
        canvas.fill_rect(Rect::new(PANEL_X + 10, PANEL_Y + 44, fill, 14))?;
    }

    // Red marker while the session is stopped (paused or crashed).
    if session.state() == RunState::Stopped {
        canvas.set_draw_color(Color::RGB(255, 0, 0));
        canvas.fill_rect(Rect::new(
            PANEL_X + PANEL_WIDTH as i32 - 24,
            PANEL_Y + 6,
            14,
            14,
        ))?;
    }

    if let Some(font) = font {
        let line = format!(
            "Speed {:>4}   Score {:>6}",
            session.speed() as u32,
            session.score() as u32
        );
        let surface = font
            .render(&line)
            .blended(Color::RGB(255, 255, 255))
            .map_err(|e| e.to_string())?;

        let texture_creator = canvas.texture_creator();
        let texture = texture_creator
            .create_texture_from_surface(&surface)
            .map_err(|e| e.to_string())?;

        let TextureQuery { width, height, .. } = texture.query();
        canvas.copy(
            &texture,
            None,
            Some(Rect::new(PANEL_X + 10, PANEL_Y + 12, width, height)),
        )?;
    }

    Ok(())
}
