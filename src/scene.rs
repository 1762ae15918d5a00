//! Scene compositor: walks a window of segments ahead of the car, rebases
//! their world coordinates so the camera sits at z = 0, integrates curvature
//! into lateral drift, projects both edges of every segment and emits an
//! ordered draw-command list in near-to-far painter's order.

use crate::camera::{project, ScreenPoint, Viewport, WorldPoint};
use crate::constants::{CAMERA_DEPTH, CAMERA_HEIGHT, DRAW_DISTANCE, LANES, ROAD_WIDTH};
use crate::track::{Shade, Track};

const ROAD_LIGHT: Rgb = Rgb::new(255, 255, 255);
const ROAD_DARK: Rgb = Rgb::new(136, 136, 136);
const LANE_MARKING: Rgb = Rgb::new(255, 255, 0);
const OBSTACLE_MARKER: Rgb = Rgb::new(200, 40, 40);

/// Obstacle marker footprint relative to the road half-width at its segment.
const OBSTACLE_WIDTH_RATIO: f32 = 0.2;
const OBSTACLE_ASPECT: f32 = 0.75;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

/// Drawing-surface primitives, in paint order. Quads carry both road edges as
/// center/y/half-width triples; the four trapezoid corners are the centers
/// plus/minus their half-widths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Quad {
        x1: i32,
        y1: i32,
        w1: i32,
        x2: i32,
        y2: i32,
        w2: i32,
        color: Rgb,
    },
    Dash {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Rgb,
    },
    Rect {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        color: Rgb,
    },
}

/// Whether the walk reached a segment directly or by wrapping past the end
/// of the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Ahead,
    Wrapped,
}

#[derive(Debug, Clone, Copy)]
pub struct EdgeProjection {
    pub world_x: f32,
    pub world_z: f32,
    pub screen: ScreenPoint,
}

/// One frame's projection scratch for one segment. Lives in the compositor's
/// arena for exactly one frame; persistent segment data stays on the track.
#[derive(Debug, Clone, Copy)]
pub struct ProjectedSegment {
    pub index: usize,
    pub near: EdgeProjection,
    pub far: EdgeProjection,
    pub placement: Placement,
    pub drawable: bool,
}

pub struct SceneCompositor {
    viewport: Viewport,
    frame: Vec<ProjectedSegment>,
    commands: Vec<DrawCommand>,
}

impl SceneCompositor {
    pub fn new(viewport: Viewport) -> Self {
        SceneCompositor {
            viewport,
            frame: Vec::with_capacity(DRAW_DISTANCE),
            commands: Vec::with_capacity(DRAW_DISTANCE * 2),
        }
    }

    /// Projects the window of segments ahead of `position` and returns the
    /// draw commands for this frame, nearest segment first.
    pub fn compose(&mut self, track: &Track, position: f32, player_x: f32) -> &[DrawCommand] {
        self.frame.clear();
        self.commands.clear();

        let base_index = track.find_segment(position).index;
        let camera_x = player_x * ROAD_WIDTH;
        let bottom = self.viewport.height as i32;

        let mut x = 0.0_f32;
        let mut dx = 0.0_f32;

        for n in 0..DRAW_DISTANCE {
            let segment = track.segment((base_index + n) % track.segment_count());
            let (near_z, far_z) = track.rebased_span(segment.index, position);

            let near_x = x;
            dx += segment.curve;
            x += dx;
            let far_x = x;

            let mut projected = ProjectedSegment {
                index: segment.index,
                near: EdgeProjection {
                    world_x: near_x,
                    world_z: near_z,
                    screen: ScreenPoint::default(),
                },
                far: EdgeProjection {
                    world_x: far_x,
                    world_z: far_z,
                    screen: ScreenPoint::default(),
                },
                placement: if segment.index < base_index {
                    Placement::Wrapped
                } else {
                    Placement::Ahead
                },
                drawable: false,
            };

            // Segments at or behind the camera plane are never projected;
            // their curvature still feeds the accumulation above.
            if near_z > 0.0 {
                projected.near.screen = self.project_edge(near_x, near_z, camera_x);
                projected.far.screen = self.project_edge(far_x, far_z, camera_x);

                // The near edge must sit strictly below the far edge and the
                // far edge must be above the viewport bottom.
                projected.drawable = projected.near.screen.y > projected.far.screen.y
                    && projected.far.screen.y < bottom;
            }

            if projected.drawable {
                self.emit(&projected, segment.shade, segment.obstacle.map(|o| o.offset));
            }
            self.frame.push(projected);
        }

        &self.commands
    }

    /// The per-frame projection arena, one record per walked segment.
    pub fn frame(&self) -> &[ProjectedSegment] {
        &self.frame
    }

    fn project_edge(&self, world_x: f32, world_z: f32, camera_x: f32) -> ScreenPoint {
        project(
            WorldPoint {
                x: world_x,
                y: 0.0,
                z: world_z,
            },
            camera_x,
            CAMERA_HEIGHT,
            0.0,
            CAMERA_DEPTH,
            self.viewport,
            ROAD_WIDTH,
        )
    }

    fn emit(&mut self, projected: &ProjectedSegment, shade: Shade, obstacle: Option<f32>) {
        let near = projected.near.screen;
        let far = projected.far.screen;

        self.commands.push(DrawCommand::Quad {
            x1: near.x,
            y1: near.y,
            w1: near.half_width,
            x2: far.x,
            y2: far.y,
            w2: far.half_width,
            color: match shade {
                Shade::Light => ROAD_LIGHT,
                Shade::Dark => ROAD_DARK,
            },
        });

        // Interior dividers only, and only on dark bands, which is what makes
        // the markings read as dashed lines along the road.
        if shade == Shade::Dark {
            for lane in 1..LANES {
                let t = lane as f32 / LANES as f32;
                let near_x = near.x - near.half_width
                    + ((near.half_width * 2) as f32 * t).round() as i32;
                let far_x =
                    far.x - far.half_width + ((far.half_width * 2) as f32 * t).round() as i32;
                self.commands.push(DrawCommand::Dash {
                    x1: near_x,
                    y1: near.y,
                    x2: far_x,
                    y2: far.y,
                    color: LANE_MARKING,
                });
            }
        }

        if let Some(offset) = obstacle {
            let center = near.x + (near.half_width as f32 * offset).round() as i32;
            let width = (near.half_width as f32 * OBSTACLE_WIDTH_RATIO)
                .round()
                .max(2.0) as u32;
            let height = (width as f32 * OBSTACLE_ASPECT).round().max(2.0) as u32;
            self.commands.push(DrawCommand::Rect {
                x: center - width as i32 / 2,
                y: near.y - height as i32,
                width,
                height,
                color: OBSTACLE_MARKER,
            });
        }
    }
}
