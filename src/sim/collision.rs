//! Collision detection for the Breakout playfield
//!
//! Pure intersection tests between the ball's bounding circle and the
//! axis-aligned boxes of bricks, paddle and power-ups. Each hit carries a
//! classified impact direction and the raw closest-point difference vector;
//! penetration resolution is left to the caller.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Cardinal impact direction, classified against screen-space axes.
///
/// Enumeration order matters: [`classify_direction`] keeps the first
/// strictly-greatest dot product, so ties resolve to `Up`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Unit vector for this direction (screen coordinates, y grows downward).
    #[inline]
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, 1.0),
            Direction::Right => Vec2::new(1.0, 0.0),
            Direction::Down => Vec2::new(0.0, -1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
        }
    }

    const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];
}

/// Result of a collision query
#[derive(Debug, Clone, Copy)]
pub struct Collision {
    /// Classified impact direction
    pub direction: Direction,
    /// Closest point on the box minus the circle center (circle queries) or
    /// the center-sum difference (box queries). Used for penetration depth.
    pub difference: Vec2,
}

/// The ball's bounding circle
#[derive(Debug, Clone, Copy)]
pub struct CircleCollider {
    pub center: Vec2,
    pub radius: f32,
}

/// Axis-aligned bounding box, top-left / bottom-right corners
#[derive(Debug, Clone, Copy)]
pub struct BoxCollider {
    pub top_left: Vec2,
    pub bottom_right: Vec2,
}

impl BoxCollider {
    #[inline]
    pub fn half_extent(&self) -> Vec2 {
        (self.bottom_right - self.top_left) / 2.0
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.top_left + self.half_extent()
    }

    /// A box with zero or negative extent on either axis cannot collide.
    #[inline]
    fn is_degenerate(&self) -> bool {
        let extent = self.bottom_right - self.top_left;
        extent.x <= 0.0 || extent.y <= 0.0
    }
}

/// Classify a vector as the cardinal direction with the largest positive
/// dot product. Zero and near-diagonal vectors resolve to `Up` (first in
/// enumeration order, strict comparison).
pub fn classify_direction(target: Vec2) -> Direction {
    let normalized = target.normalize_or_zero();
    let mut best = Direction::Up;
    let mut max = 0.0;
    for direction in Direction::ALL {
        let scale = normalized.dot(direction.unit());
        if scale > max {
            max = scale;
            best = direction;
        }
    }
    best
}

/// Circle-vs-AABB test.
///
/// Clamps the circle center into the box to find the closest point; a hit
/// is reported when that point lies within the circle's radius. Degenerate
/// shapes (non-positive radius or box extent) never collide.
pub fn circle_box_collision(circle: &CircleCollider, aabb: &BoxCollider) -> Option<Collision> {
    if circle.radius <= 0.0 || aabb.is_degenerate() {
        return None;
    }
    let half_extent = aabb.half_extent();
    let center = aabb.center();
    let closest = center + (circle.center - center).clamp(-half_extent, half_extent);
    let difference = closest - circle.center;
    if difference.length() > circle.radius {
        return None;
    }
    Some(Collision {
        direction: classify_direction(difference),
        difference,
    })
}

/// AABB-vs-AABB overlap test.
///
/// The direction is classified from the difference of the corner sums,
/// which approximates the center-to-center vector. Not a minimum
/// translation face test; adequate for the falling power-up pickups.
pub fn box_box_collision(a: &BoxCollider, b: &BoxCollider) -> Option<Collision> {
    if a.is_degenerate() || b.is_degenerate() {
        return None;
    }
    let overlap_x = b.top_left.x <= a.bottom_right.x && a.top_left.x <= b.bottom_right.x;
    let overlap_y = b.top_left.y <= a.bottom_right.y && a.top_left.y <= b.bottom_right.y;
    if !(overlap_x && overlap_y) {
        return None;
    }
    let difference = (a.top_left + a.bottom_right) - (b.top_left + b.bottom_right);
    Some(Collision {
        direction: classify_direction(difference),
        difference,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn aabb(x0: f32, y0: f32, x1: f32, y1: f32) -> BoxCollider {
        BoxCollider {
            top_left: Vec2::new(x0, y0),
            bottom_right: Vec2::new(x1, y1),
        }
    }

    #[test]
    fn test_circle_box_hit_from_below() {
        // Ball top-left at (100,100), radius 12.5 -> center (112.5, 112.5)
        let circle = CircleCollider {
            center: Vec2::new(112.5, 112.5),
            radius: 12.5,
        };
        let brick = aabb(90.0, 90.0, 110.0, 110.0);

        let result = circle_box_collision(&circle, &brick).expect("should collide");
        assert_eq!(result.direction, Direction::Down);
    }

    #[test]
    fn test_circle_box_miss() {
        let circle = CircleCollider {
            center: Vec2::new(200.0, 200.0),
            radius: 10.0,
        };
        let brick = aabb(0.0, 0.0, 50.0, 50.0);
        assert!(circle_box_collision(&circle, &brick).is_none());
    }

    #[test]
    fn test_circle_box_touching_edge() {
        // Closest point exactly radius away still counts as a hit
        let circle = CircleCollider {
            center: Vec2::new(60.0, 25.0),
            radius: 10.0,
        };
        let brick = aabb(0.0, 0.0, 50.0, 50.0);
        assert!(circle_box_collision(&circle, &brick).is_some());
    }

    #[test]
    fn test_degenerate_shapes_never_collide() {
        let circle = CircleCollider {
            center: Vec2::new(25.0, 25.0),
            radius: 0.0,
        };
        let brick = aabb(0.0, 0.0, 50.0, 50.0);
        assert!(circle_box_collision(&circle, &brick).is_none());

        let fat = CircleCollider {
            center: Vec2::new(25.0, 25.0),
            radius: 10.0,
        };
        let flat = aabb(0.0, 25.0, 50.0, 25.0);
        assert!(circle_box_collision(&fat, &flat).is_none());
        assert!(box_box_collision(&flat, &brick).is_none());
    }

    #[test]
    fn test_box_box_overlap() {
        let a = aabb(0.0, 0.0, 20.0, 20.0);
        let b = aabb(10.0, 10.0, 30.0, 30.0);
        assert!(box_box_collision(&a, &b).is_some());

        let c = aabb(21.0, 0.0, 40.0, 20.0);
        assert!(box_box_collision(&a, &c).is_none());

        // Overlap on x only is not a collision
        let d = aabb(10.0, 30.0, 30.0, 50.0);
        assert!(box_box_collision(&a, &d).is_none());
    }

    #[test]
    fn test_classify_cardinal_axes() {
        assert_eq!(classify_direction(Vec2::new(0.0, 5.0)), Direction::Up);
        assert_eq!(classify_direction(Vec2::new(3.0, 0.0)), Direction::Right);
        assert_eq!(classify_direction(Vec2::new(0.0, -1.0)), Direction::Down);
        assert_eq!(classify_direction(Vec2::new(-0.2, 0.0)), Direction::Left);
    }

    #[test]
    fn test_classify_tie_break() {
        // Exact diagonals dot equally against two axes; the first
        // enumerated direction wins.
        assert_eq!(classify_direction(Vec2::new(1.0, 1.0)), Direction::Up);
        assert_eq!(classify_direction(Vec2::new(-1.0, -1.0)), Direction::Down);
        assert_eq!(classify_direction(Vec2::ZERO), Direction::Up);
    }

    proptest! {
        /// A collision is reported iff the distance from the circle center
        /// to its closest point on the box is within the radius.
        #[test]
        fn prop_circle_box_matches_distance(
            cx in -500.0f32..500.0,
            cy in -500.0f32..500.0,
            radius in 0.1f32..50.0,
            bx in -500.0f32..500.0,
            by in -500.0f32..500.0,
            w in 1.0f32..200.0,
            h in 1.0f32..200.0,
        ) {
            let circle = CircleCollider { center: Vec2::new(cx, cy), radius };
            let bb = BoxCollider {
                top_left: Vec2::new(bx, by),
                bottom_right: Vec2::new(bx + w, by + h),
            };
            let half = bb.half_extent();
            let closest = bb.center() + (circle.center - bb.center()).clamp(-half, half);
            let dist = (closest - circle.center).length();
            prop_assert_eq!(circle_box_collision(&circle, &bb).is_some(), dist <= radius);
        }

        /// Box overlap is symmetric in its arguments.
        #[test]
        fn prop_box_box_symmetric(
            ax in -200.0f32..200.0, ay in -200.0f32..200.0,
            aw in 1.0f32..100.0, ah in 1.0f32..100.0,
            bx in -200.0f32..200.0, by in -200.0f32..200.0,
            bw in 1.0f32..100.0, bh in 1.0f32..100.0,
        ) {
            let a = BoxCollider {
                top_left: Vec2::new(ax, ay),
                bottom_right: Vec2::new(ax + aw, ay + ah),
            };
            let b = BoxCollider {
                top_left: Vec2::new(bx, by),
                bottom_right: Vec2::new(bx + bw, by + bh),
            };
            prop_assert_eq!(
                box_box_collision(&a, &b).is_some(),
                box_box_collision(&b, &a).is_some()
            );
        }
    }
}
