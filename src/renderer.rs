use sdl2::image::{InitFlag, LoadTexture};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};

use crate::constants::PLAYER_PIXEL_SCALE;
use crate::scene::{DrawCommand, Rgb};

const PLAYER_WIDTH: u32 = 50;
const PLAYER_HEIGHT: u32 = 80;

pub struct Renderer<'a> {
    car_texture: Option<Texture<'a>>,
}

impl<'a> Renderer<'a> {
    pub fn new(texture_creator: &'a TextureCreator<WindowContext>) -> Result<Self, String> {
        // Initialize SDL2 image
        sdl2::image::init(InitFlag::PNG)?;

        // Try to load the car texture, fall back to flat-color drawing
        let car_texture = match texture_creator.load_texture("assets/vehicles/car.png") {
            Ok(texture) => Some(texture),
            Err(e) => {
                println!("Warning: Could not load car texture: {}", e);
                None
            }
        };

        Ok(Renderer { car_texture })
    }

    // Draws one frame: backdrop, the composed road commands in their given
    // order, then the player car as a fixed overlay on top
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        commands: &[DrawCommand],
        player_x: f32,
    ) -> Result<(), String> {
        canvas.set_draw_color(Color::RGB(40, 100, 40)); // grass backdrop
        canvas.clear();

        for command in commands {
            match *command {
                DrawCommand::Quad {
                    x1,
                    y1,
                    w1,
                    x2,
                    y2,
                    w2,
                    color,
                } => self.fill_trapezoid(canvas, x1, y1, w1, x2, y2, w2, color)?,
                DrawCommand::Dash {
                    x1,
                    y1,
                    x2,
                    y2,
                    color,
                } => {
                    canvas.set_draw_color(sdl_color(color));
                    canvas.draw_line((x1, y1), (x2, y2))?;
                }
                DrawCommand::Rect {
                    x,
                    y,
                    width,
                    height,
                    color,
                } => {
                    canvas.set_draw_color(sdl_color(color));
                    canvas.fill_rect(Rect::new(x, y, width, height))?;
                }
            }
        }

        self.draw_player(canvas, player_x)?;
        Ok(())
    }

    // Scanline fill: the canvas has no filled-polygon call, so the trapezoid
    // is rasterized as one-pixel rows interpolated between far and near edge
    fn fill_trapezoid(
        &self,
        canvas: &mut Canvas<Window>,
        x1: i32,
        y1: i32,
        w1: i32,
        x2: i32,
        y2: i32,
        w2: i32,
        color: Rgb,
    ) -> Result<(), String> {
        let span = y1 - y2;
        if span <= 0 {
            return Ok(());
        }

        canvas.set_draw_color(sdl_color(color));
        for y in y2..y1 {
            let t = (y - y2) as f32 / span as f32;
            let center = x2 as f32 + (x1 - x2) as f32 * t;
            let half_width = (w2 as f32 + (w1 - w2) as f32 * t).max(0.5);
            canvas.fill_rect(Rect::new(
                (center - half_width).round() as i32,
                y,
                (half_width * 2.0).round() as u32,
                1,
            ))?;
        }
        Ok(())
    }

    // The player's car is not part of the projected scene; it sits at a fixed
    // spot near the viewport bottom, shifted laterally with the steering offset
    fn draw_player(&self, canvas: &mut Canvas<Window>, player_x: f32) -> Result<(), String> {
        let (width, height) = canvas.output_size()?;
        let x = width as i32 / 2 - PLAYER_WIDTH as i32 / 2
            + (player_x * PLAYER_PIXEL_SCALE).round() as i32;
        let y = height as i32 - PLAYER_HEIGHT as i32;
        let rect = Rect::new(x, y, PLAYER_WIDTH, PLAYER_HEIGHT);

        if let Some(texture) = &self.car_texture {
            canvas.copy(texture, None, Some(rect))?;
        } else {
            canvas.set_draw_color(Color::RGB(220, 40, 40));
            canvas.fill_rect(rect)?;
            canvas.set_draw_color(Color::RGB(0, 0, 0));
            canvas.draw_rect(rect)?;
        }
        Ok(())
    }
}

fn sdl_color(color: Rgb) -> Color {
    Color::RGB(color.r, color.g, color.b)
}
