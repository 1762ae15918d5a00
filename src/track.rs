//! Track model: an ordered, cyclic sequence of fixed-length road segments.
//! Built once at startup and never mutated afterwards; all per-frame
//! projection state lives in the compositor, not here.

use rand::Rng;

use crate::constants::{
    CURVE_AMPLITUDE, CURVE_PERIOD, OBSTACLE_SPACING, OBSTACLE_WARMUP, RUMBLE_LENGTH,
    SEGMENT_COUNT, SEGMENT_LENGTH,
};

/// Alternating color band, deterministic from the segment index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Light,
    Dark,
}

/// A stationary obstacle on the road. The offset is lateral, in road
/// half-widths, so -1.0 is the left edge and 1.0 the right edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub offset: f32,
}

#[derive(Debug, Clone)]
pub struct Segment {
    pub index: usize,
    pub curve: f32,
    pub shade: Shade,
    pub obstacle: Option<Obstacle>,
}

pub struct Track {
    segments: Vec<Segment>,
    segment_length: f32,
}

impl Track {
    /// Builds a track from a curvature function and an obstacle rule, both
    /// called once per segment index in track order.
    pub fn build<C, O>(
        segment_count: usize,
        segment_length: f32,
        mut curve: C,
        mut obstacle: O,
    ) -> Self
    where
        C: FnMut(usize) -> f32,
        O: FnMut(usize) -> Option<Obstacle>,
    {
        assert!(segment_count > 0, "track needs at least one segment");
        assert!(segment_length > 0.0, "segment length must be positive");

        let segments = (0..segment_count)
            .map(|index| Segment {
                index,
                curve: curve(index),
                shade: if (index / RUMBLE_LENGTH) % 2 == 0 {
                    Shade::Light
                } else {
                    Shade::Dark
                },
                obstacle: obstacle(index),
            })
            .collect();

        Track {
            segments,
            segment_length,
        }
    }

    /// The default course: gentle alternating bends from a sine sweep, with
    /// randomly offset obstacles on a periodic subset of segments once the
    /// warm-up stretch is over.
    pub fn standard() -> Self {
        let mut rng = rand::thread_rng();
        Self::build(
            SEGMENT_COUNT,
            SEGMENT_LENGTH,
            |index| (index as f32 / CURVE_PERIOD).sin() * CURVE_AMPLITUDE,
            move |index| {
                if index >= OBSTACLE_WARMUP && index % OBSTACLE_SPACING == 0 {
                    Some(Obstacle {
                        offset: rng.gen_range(-1.0..=1.0),
                    })
                } else {
                    None
                }
            },
        )
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn segment_length(&self) -> f32 {
        self.segment_length
    }

    /// Total track length in world units.
    pub fn length(&self) -> f32 {
        self.segments.len() as f32 * self.segment_length
    }

    pub fn segment(&self, index: usize) -> &Segment {
        &self.segments[index]
    }

    /// Returns the segment whose longitudinal span contains `z`, for any
    /// non-negative `z` including positions beyond one lap. Negative `z` is a
    /// caller contract violation.
    pub fn find_segment(&self, z: f32) -> &Segment {
        assert!(z >= 0.0, "segment lookup for negative position {}", z);
        let index = (z / self.segment_length).floor() as usize % self.segments.len();
        &self.segments[index]
    }

    /// Near/far longitudinal coordinates of a segment rebased so the camera
    /// sits at z = 0. Segments tile without gaps: the far coordinate of
    /// segment `i` equals the near coordinate of segment `i + 1`.
    pub fn rebased_span(&self, index: usize, position: f32) -> (f32, f32) {
        let near = index as f32 * self.segment_length - position;
        (near, near + self.segment_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_track(segment_count: usize) -> Track {
        Track::build(segment_count, 200.0, |_| 0.0, |_| None)
    }

    #[test]
    fn segments_tile_without_gaps() {
        let track = flat_track(20);
        for i in 0..track.segment_count() - 1 {
            let (_, far) = track.rebased_span(i, 0.0);
            let (next_near, _) = track.rebased_span(i + 1, 0.0);
            assert_eq!(far, next_near, "gap between segments {} and {}", i, i + 1);
        }
    }

    #[test]
    fn find_segment_contains_the_position() {
        let track = flat_track(10);
        for &z in &[0.0, 150.0, 199.9, 200.0, 1999.0, 2000.0, 2450.0, 987654.0] {
            let segment = track.find_segment(z);
            let wrapped = z % track.length();
            let start = segment.index as f32 * track.segment_length();
            assert!(
                start <= wrapped && wrapped < start + track.segment_length(),
                "position {} landed in segment {}",
                z,
                segment.index
            );
        }
    }

    #[test]
    #[should_panic(expected = "negative position")]
    fn find_segment_rejects_negative_positions() {
        flat_track(10).find_segment(-1.0);
    }

    #[test]
    fn banding_alternates_every_rumble_length() {
        let track = flat_track(4 * RUMBLE_LENGTH);
        for segment in (0..track.segment_count()).map(|i| track.segment(i)) {
            let expected = if (segment.index / RUMBLE_LENGTH) % 2 == 0 {
                Shade::Light
            } else {
                Shade::Dark
            };
            assert_eq!(segment.shade, expected);
        }
        assert_eq!(track.segment(0).shade, Shade::Light);
        assert_eq!(track.segment(RUMBLE_LENGTH).shade, Shade::Dark);
    }

    #[test]
    fn curvature_comes_from_the_curve_fn() {
        let track = Track::build(8, 200.0, |i| i as f32 * 0.5, |_| None);
        assert_eq!(track.segment(0).curve, 0.0);
        assert_eq!(track.segment(5).curve, 2.5);
    }

    #[test]
    fn standard_track_places_obstacles_periodically_after_warmup() {
        let track = Track::standard();
        for segment in (0..track.segment_count()).map(|i| track.segment(i)) {
            let qualifies =
                segment.index >= OBSTACLE_WARMUP && segment.index % OBSTACLE_SPACING == 0;
            assert_eq!(
                segment.obstacle.is_some(),
                qualifies,
                "unexpected obstacle assignment on segment {}",
                segment.index
            );
            if let Some(obstacle) = segment.obstacle {
                assert!((-1.0..=1.0).contains(&obstacle.offset));
            }
        }
    }
}
