//! Closed-form bubble paths
//!
//! A trajectory maps a bubble's x to its y. There is no integration: the
//! bubble's x advances with time and y is looked up. Reversing direction at
//! a wall is done by reflecting the current path about the wall-contact x,
//! which keeps y continuous.

use super::world::World;
use crate::consts::SPLIT_ARC_REACH;

/// Size-dependent constants of the resting bounce
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BounceShape {
    /// Gap between ground and bubble centre at the bottom of a bounce
    /// (radius plus half the stroke)
    pub lift: f64,
    /// Peak height of a bounce above its lowest point
    pub amplitude: f64,
    /// Angular frequency of |sin| along x (1 / width)
    pub frequency: f64,
}

impl BounceShape {
    /// Bounce for a bubble of the given size.
    ///
    /// Smaller bubbles hop lower and narrower, but never lower than 1.5x the
    /// player height nor narrower than the player base / 1.5.
    pub fn new(
        lift: f64,
        size_modifier: f64,
        max_jump_height: f64,
        max_jump_width: f64,
        player_height: f64,
        player_base_width: f64,
    ) -> Self {
        let min_height = player_height * 1.5;
        let min_width = player_base_width / 1.5;
        Self {
            lift,
            amplitude: (max_jump_height * size_modifier).max(min_height),
            frequency: 1.0 / (max_jump_width * size_modifier).max(min_width),
        }
    }
}

/// A path y = f(x)
#[derive(Debug, Clone, PartialEq)]
pub enum Trajectory {
    /// Periodic hop along the ground, lowest point at `offset_x`
    Bounce { offset_x: f64, shape: BounceShape },
    /// Upward-opening arc through `(anchor_x, anchor_y)`, rising to its vertex
    /// `SPLIT_ARC_REACH` to the right
    Parabola { anchor_x: f64, anchor_y: f64 },
    /// `inner` reflected about the vertical line `x = axis_x`
    Mirrored { inner: Box<Trajectory>, axis_x: f64 },
}

impl Trajectory {
    pub fn bounce(offset_x: f64, shape: BounceShape) -> Self {
        Trajectory::Bounce { offset_x, shape }
    }

    pub fn parabola(anchor_x: f64, anchor_y: f64) -> Self {
        Trajectory::Parabola { anchor_x, anchor_y }
    }

    /// Evaluate the path at `x`
    pub fn y_at(&self, x: f64, world: &World) -> f64 {
        match self {
            Trajectory::Bounce { offset_x, shape } => {
                let hop = ((x - offset_x) * shape.frequency).sin().abs() * shape.amplitude;
                world.height - (world.ground_level + shape.lift + hop)
            }
            Trajectory::Parabola { anchor_x, anchor_y } => {
                let d = x - anchor_x - SPLIT_ARC_REACH;
                anchor_y + d * d / SPLIT_ARC_REACH - SPLIT_ARC_REACH
            }
            Trajectory::Mirrored { inner, axis_x } => inner.y_at(2.0 * axis_x - x, world),
        }
    }

    /// Reflect this path about `x = axis_x`.
    ///
    /// The result is never nested more than one level deep: a bounce is
    /// symmetric about its offset so it reflects onto another bounce, and
    /// reflecting a reflected path again composes to a shift of the inner
    /// path.
    pub fn mirrored(self, axis_x: f64) -> Self {
        match self {
            Trajectory::Bounce { offset_x, shape } => Trajectory::Bounce {
                offset_x: 2.0 * axis_x - offset_x,
                shape,
            },
            Trajectory::Mirrored { inner, axis_x: a } => (*inner).shifted(2.0 * (axis_x - a)),
            other => Trajectory::Mirrored {
                inner: Box::new(other),
                axis_x,
            },
        }
    }

    /// The same path moved `dx` to the right: `x ↦ f(x - dx)`
    pub fn shifted(self, dx: f64) -> Self {
        match self {
            Trajectory::Bounce { offset_x, shape } => Trajectory::Bounce {
                offset_x: offset_x + dx,
                shape,
            },
            Trajectory::Parabola { anchor_x, anchor_y } => Trajectory::Parabola {
                anchor_x: anchor_x + dx,
                anchor_y,
            },
            Trajectory::Mirrored { inner, axis_x } => Trajectory::Mirrored {
                inner,
                axis_x: axis_x + dx / 2.0,
            },
        }
    }

    /// Nesting depth of reflections
    pub fn depth(&self) -> usize {
        match self {
            Trajectory::Mirrored { inner, .. } => 1 + inner.depth(),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use proptest::prelude::*;

    fn world() -> World {
        World::new(&Tuning::default(), 600.0, 450.0)
    }

    fn shape(size: f64) -> BounceShape {
        BounceShape::new(28.8, size, 150.0, 60.0, 32.0, 32.0)
    }

    #[test]
    fn test_bounce_rests_on_ground_at_offset() {
        let w = world();
        let t = Trajectory::bounce(100.0, shape(1.0));
        // Lowest point: centre sits `lift` above the ground
        assert!((t.y_at(100.0, &w) - (450.0 - 25.0 - 28.8)).abs() < 1e-9);
    }

    #[test]
    fn test_bounce_peak_height() {
        let w = world();
        let s = shape(1.0);
        let t = Trajectory::bounce(0.0, s);
        let peak_x = std::f64::consts::FRAC_PI_2 / s.frequency;
        assert!((t.y_at(peak_x, &w) - (450.0 - 25.0 - 28.8 - 150.0)).abs() < 1e-9);
    }

    #[test]
    fn test_small_bubbles_hop_at_least_minimum() {
        let s = shape(0.25);
        assert_eq!(s.amplitude, 48.0); // 32 * 1.5 beats 150 * 0.25
        assert!((s.frequency - 1.5 / 32.0).abs() < 1e-12); // 32 / 1.5 beats 60 * 0.25
    }

    #[test]
    fn test_parabola_passes_through_anchor() {
        let w = world();
        let t = Trajectory::parabola(200.0, 300.0);
        assert!((t.y_at(200.0, &w) - 300.0).abs() < 1e-9);
        // Vertex rises 50px at 50px to the right
        assert!((t.y_at(250.0, &w) - 250.0).abs() < 1e-9);
        assert!(t.y_at(320.0, &w) > 300.0);
    }

    #[test]
    fn test_mirror_of_parabola_diverges_left() {
        let w = world();
        let right = Trajectory::parabola(200.0, 300.0);
        let left = right.clone().mirrored(200.0);
        assert!((left.y_at(150.0, &w) - right.y_at(250.0, &w)).abs() < 1e-9);
        assert!((left.y_at(200.0, &w) - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_double_mirror_unwraps() {
        let t = Trajectory::parabola(10.0, 20.0);
        assert_eq!(t.clone().mirrored(42.0).mirrored(42.0), t);
        // Two different axes compose to a shift by twice their distance
        assert_eq!(
            t.clone().mirrored(42.0).mirrored(43.0),
            Trajectory::parabola(12.0, 20.0)
        );
    }

    #[test]
    fn test_bounce_mirrors_onto_bounce() {
        let t = Trajectory::bounce(100.0, shape(1.0)).mirrored(150.0);
        assert_eq!(t, Trajectory::bounce(200.0, shape(1.0)));
    }

    #[test]
    fn test_wall_to_wall_mirroring_stays_flat() {
        let w = world();
        let start = Trajectory::parabola(300.0, 200.0);
        let mut t = start.clone();
        for i in 0..1000 {
            let axis = if i % 2 == 0 { 580.0 } else { 20.0 };
            t = t.mirrored(axis);
            assert!(t.depth() <= 1);
        }
        // An even number of reflections between two walls is a pure shift
        let shift = 1000.0 * (20.0 - 580.0);
        assert_eq!(t, start.clone().shifted(shift));
        assert!((t.y_at(0.0, &w) - start.y_at(-shift, &w)).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_mirror_is_self_inverse(x in -1000.0f64..1000.0, x0 in -500.0f64..500.0, off in -300.0f64..300.0) {
            let w = world();
            let f = Trajectory::bounce(off, shape(0.75));
            let once = Trajectory::Mirrored { inner: Box::new(f.clone()), axis_x: x0 };
            let twice = Trajectory::Mirrored { inner: Box::new(once), axis_x: x0 };
            prop_assert!((twice.y_at(x, &w) - f.y_at(x, &w)).abs() < 1e-6);
            prop_assert!((f.clone().mirrored(x0).mirrored(x0).y_at(x, &w) - f.y_at(x, &w)).abs() < 1e-9);
        }

        #[test]
        fn prop_mirror_reflects_composed_path(x in -1000.0f64..1000.0, a in -500.0f64..500.0, b in -500.0f64..500.0) {
            let w = world();
            let f = Trajectory::parabola(30.0, 200.0);
            let g = f.clone().mirrored(a).mirrored(b);
            // g(x) = f(2a - (2b - x))
            let expected = f.y_at(2.0 * a - (2.0 * b - x), &w);
            prop_assert!((g.y_at(x, &w) - expected).abs() < 1e-6 * expected.abs().max(1.0));
        }

        #[test]
        fn prop_mirror_chain_matches_nested(axes in proptest::collection::vec(-500.0f64..500.0, 1..8), x in -1000.0f64..1000.0) {
            let w = world();
            let f = Trajectory::parabola(30.0, 200.0);
            let nested = axes.iter().fold(f.clone(), |t, &a| Trajectory::Mirrored { inner: Box::new(t), axis_x: a });
            let flat = axes.iter().fold(f, |t, &a| t.mirrored(a));
            prop_assert!(flat.depth() <= 1);
            let expected = nested.y_at(x, &w);
            prop_assert!((flat.y_at(x, &w) - expected).abs() < 1e-6 * expected.abs().max(1.0));
        }

        #[test]
        fn prop_mirror_fixes_axis(x0 in -500.0f64..500.0) {
            let w = world();
            let f = Trajectory::parabola(0.0, 100.0);
            prop_assert!((f.clone().mirrored(x0).y_at(x0, &w) - f.y_at(x0, &w)).abs() < 1e-9);
        }
    }
}
