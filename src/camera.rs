//! Pinhole-camera approximation: a world point maps to a screen point and a
//! projective scale factor. Scale drives both apparent size and vertical
//! screen position; there is no true 3D rotation anywhere in the pipeline.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
    pub half_width: i32,
    pub scale: f32,
}

/// Projects a world point into screen space.
///
/// Degenerate when `world.z == camera_z` (division by zero); the compositor
/// guarantees it never asks for a point on the camera plane.
pub fn project(
    world: WorldPoint,
    camera_x: f32,
    camera_y: f32,
    camera_z: f32,
    depth: f32,
    viewport: Viewport,
    road_width: f32,
) -> ScreenPoint {
    debug_assert!(
        (world.z - camera_z).abs() > f32::EPSILON,
        "projection requested on the camera plane"
    );

    let half_w = viewport.width as f32 / 2.0;
    let half_h = viewport.height as f32 / 2.0;

    let scale = depth / (world.z - camera_z);
    ScreenPoint {
        x: ((1.0 + scale * (world.x - camera_x)) * half_w).round() as i32,
        y: ((1.0 - scale * (world.y - camera_y)) * half_h).round() as i32,
        half_width: (scale * road_width * half_w).round() as i32,
        scale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROAD_WIDTH: f32 = 2000.0;

    fn viewport() -> Viewport {
        Viewport {
            width: 1024,
            height: 768,
        }
    }

    fn project_road_point(z: f32) -> ScreenPoint {
        let world = WorldPoint { x: 0.0, y: 0.0, z };
        project(world, 0.0, 1500.0, 0.0, 1.0, viewport(), ROAD_WIDTH)
    }

    #[test]
    fn nearer_points_are_larger_and_lower_on_screen() {
        let near = project_road_point(1600.0);
        let far = project_road_point(3200.0);

        assert!(near.scale > far.scale);
        assert!(near.y > far.y, "nearer point must sit lower on screen");
        assert!(near.half_width > far.half_width);
    }

    #[test]
    fn projection_matches_reference_values() {
        // z = 2000 with depth 1 gives scale 1/2000; camera height 1500 puts
        // the road plane at y = (1 + 0.75) * 384.
        let p = project_road_point(2000.0);

        assert!((p.scale - 0.0005).abs() < 1e-6);
        assert_eq!(p.x, 512);
        assert_eq!(p.y, 672);
        assert_eq!(p.half_width, 512);
    }

    #[test]
    fn camera_offset_shifts_screen_x_opposite() {
        let world = WorldPoint {
            x: 0.0,
            y: 0.0,
            z: 2000.0,
        };
        let centered = project(world, 0.0, 1500.0, 0.0, 1.0, viewport(), ROAD_WIDTH);
        let offset = project(world, 500.0, 1500.0, 0.0, 1.0, viewport(), ROAD_WIDTH);

        assert!(offset.x < centered.x, "camera moving right pushes the point left");
    }
}
