//! Shape conversion from collider descriptors to `Avian2D` colliders.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::extract::ColliderShape;

/// Convert a descriptor shape to an `Avian2D` collider.
///
/// | Descriptor shape | Avian Collider |
/// |------------------|----------------|
/// | Box | `Collider::rectangle(2 * half_width, 2 * half_height)` |
/// | Circle | `Collider::circle(radius)` |
/// | Polygon | `Collider::convex_hull(vertices)`, triangle fan if no hull exists |
///
/// Polygon vertices are not validated. Concave input is wrapped by its hull. Collinear
/// input has no hull and falls back to a triangle fan, and input with fewer than three
/// distinct points becomes a degenerate triangle. How the solver treats either is up to
/// the solver.
pub fn collider_for(shape: &ColliderShape) -> Collider {
    match shape {
        ColliderShape::Box {
            half_width,
            half_height,
        } => Collider::rectangle(half_width * 2.0, half_height * 2.0),

        ColliderShape::Circle { radius } => Collider::circle(*radius),

        ColliderShape::Polygon { vertices } => {
            // parry asserts on hulls of empty or fully coincident point sets
            let distinct = distinct_vertices(vertices);
            if distinct.len() < 3 {
                warn!(
                    "Polygon has {} distinct vertices, creating degenerate triangle",
                    distinct.len()
                );
                return degenerate_triangle(&distinct);
            }

            Collider::convex_hull(vertices.clone()).unwrap_or_else(|| {
                warn!(
                    "Failed to create convex hull for polygon with {} vertices, using triangle mesh",
                    vertices.len()
                );
                polygon_to_trimesh(vertices)
            })
        }
    }
}

fn distinct_vertices(vertices: &[Vec2]) -> Vec<Vec2> {
    let mut distinct: Vec<Vec2> = Vec::with_capacity(vertices.len());
    for vertex in vertices {
        if !distinct.contains(vertex) {
            distinct.push(*vertex);
        }
    }
    distinct
}

/// Zero-area triangle through up to two distinct points.
fn degenerate_triangle(points: &[Vec2]) -> Collider {
    let a = points.first().copied().unwrap_or(Vec2::ZERO);
    let b = points.get(1).copied().unwrap_or(a);
    Collider::triangle(a, b, b)
}

/// Convert a polygon to a triangle mesh collider.
///
/// Simple triangle fan from the first vertex. Needs at least three vertices.
fn polygon_to_trimesh(vertices: &[Vec2]) -> Collider {
    let indices = (1..vertices.len() as u32 - 1)
        .map(|i| [0, i, i + 1])
        .collect();

    Collider::trimesh(vertices.to_vec(), indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_to_cuboid() {
        let collider = collider_for(&ColliderShape::Box {
            half_width: 8.0,
            half_height: 4.0,
        });

        let cuboid = collider.shape().as_cuboid().expect("box should be a cuboid");
        assert_eq!(cuboid.half_extents.x, 8.0);
        assert_eq!(cuboid.half_extents.y, 4.0);
    }

    #[test]
    fn test_circle_to_ball() {
        let collider = collider_for(&ColliderShape::Circle { radius: 10.0 });

        let ball = collider.shape().as_ball().expect("circle should be a ball");
        assert_eq!(ball.radius, 10.0);
    }

    #[test]
    fn test_polygon_to_convex_polygon() {
        let collider = collider_for(&ColliderShape::Polygon {
            vertices: vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(64.0, 0.0),
                Vec2::new(64.0, 48.0),
            ],
        });

        assert!(collider.shape().as_convex_polygon().is_some());
    }

    #[test]
    fn test_coincident_polygon_becomes_degenerate_triangle() {
        let collider = collider_for(&ColliderShape::Polygon {
            vertices: vec![Vec2::ZERO, Vec2::ZERO, Vec2::ZERO],
        });

        let triangle = collider
            .shape()
            .as_triangle()
            .expect("coincident polygon should be a triangle");
        assert_eq!(triangle.a, triangle.b);
        assert_eq!(triangle.b, triangle.c);
    }

    #[test]
    fn test_empty_polygon_becomes_degenerate_triangle() {
        let collider = collider_for(&ColliderShape::Polygon { vertices: vec![] });
        assert!(collider.shape().as_triangle().is_some());
    }

    #[test]
    fn test_two_point_polygon_keeps_its_points() {
        let collider = collider_for(&ColliderShape::Polygon {
            vertices: vec![Vec2::ZERO, Vec2::new(16.0, 0.0), Vec2::new(16.0, 0.0)],
        });

        let triangle = collider.shape().as_triangle().expect("triangle");
        assert_eq!(triangle.a.x, 0.0);
        assert_eq!(triangle.b.x, 16.0);
        assert_eq!(triangle.c.x, 16.0);
    }

    #[test]
    fn test_collinear_polygon_does_not_panic() {
        let collider = collider_for(&ColliderShape::Polygon {
            vertices: vec![Vec2::ZERO, Vec2::new(8.0, 0.0), Vec2::new(16.0, 0.0)],
        });

        let aabb = collider.aabb(Vec2::ZERO, Rotation::default());
        assert_eq!(aabb.min.x, 0.0);
        assert_eq!(aabb.max.x, 16.0);
    }
}
