//! Annotation objects read from a Tiled object layer.

use bevy::prelude::*;
use tiled::ObjectShape;

use crate::extract::ExtractError;

/// Geometry of an annotation object.
///
/// Only rectangles, ellipses and polygons can become colliders. Every other Tiled shape
/// (points, polylines, text, tile objects) is kept as [`AnnotationShape::Other`] so the
/// extractor can skip it without an error.
#[derive(Debug, Clone, PartialEq)]
pub enum AnnotationShape {
    /// Axis-aligned rectangle, `position` is its bottom-left corner
    Rectangle { width: f32, height: f32 },
    /// Ellipse inscribed in a box, `position` is the box's bottom-left corner
    Ellipse { width: f32, height: f32 },
    /// Closed polygon, vertices relative to `position`
    Polygon { vertices: Vec<Vec2> },
    /// Unsupported shape, carries the Tiled shape name for logging
    Other { kind: &'static str },
}

/// An annotation object in world space.
///
/// World space is the map's own units with y pointing up and the bottom-left corner of
/// the map at the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationObject {
    /// Tiled object ID
    pub id: u32,
    /// Object name as set in Tiled (may be empty)
    pub name: String,
    /// Reference point of the shape
    pub position: Vec2,
    pub shape: AnnotationShape,
}

impl AnnotationObject {
    /// Convert a Tiled object into world space.
    ///
    /// Tiled stores y growing downwards from the top edge of the map. Rectangles and
    /// ellipses are anchored at the top-left corner of their box, which becomes the
    /// bottom-left corner once flipped. Polygon vertices are relative to the object
    /// origin, so only their y sign changes.
    ///
    /// Rotation is not applied.
    pub fn from_tiled(object: &tiled::ObjectData, map_height: f32) -> Self {
        let (position, shape) = match &object.shape {
            _ if object.tile_data().is_some() => (
                Vec2::new(object.x, map_height - object.y),
                AnnotationShape::Other { kind: "tile" },
            ),

            ObjectShape::Rect { width, height } => (
                Vec2::new(object.x, map_height - object.y - height),
                AnnotationShape::Rectangle {
                    width: *width,
                    height: *height,
                },
            ),

            ObjectShape::Ellipse { width, height } => (
                Vec2::new(object.x, map_height - object.y - height),
                AnnotationShape::Ellipse {
                    width: *width,
                    height: *height,
                },
            ),

            ObjectShape::Polygon { points } => (
                Vec2::new(object.x, map_height - object.y),
                AnnotationShape::Polygon {
                    vertices: points.iter().map(|(x, y)| Vec2::new(*x, -*y)).collect(),
                },
            ),

            ObjectShape::Polyline { .. } => (
                Vec2::new(object.x, map_height - object.y),
                AnnotationShape::Other { kind: "polyline" },
            ),

            ObjectShape::Point(x, y) => (
                Vec2::new(*x, map_height - *y),
                AnnotationShape::Other { kind: "point" },
            ),

            ObjectShape::Text { .. } => (
                Vec2::new(object.x, map_height - object.y),
                AnnotationShape::Other { kind: "text" },
            ),
        };

        Self {
            id: object.id(),
            name: object.name.clone(),
            position,
            shape,
        }
    }
}

/// Read every object of the top-level object layer named `layer_name`.
///
/// Objects are returned in layer order. Nested group layers are not searched.
///
/// # Errors
///
/// [`ExtractError::MissingLayer`] if no top-level object layer has that name.
pub fn collision_objects(
    map: &tiled::Map,
    layer_name: &str,
    map_height: f32,
) -> Result<Vec<AnnotationObject>, ExtractError> {
    let object_layer = map
        .layers()
        .filter(|layer| layer.name == layer_name)
        .find_map(|layer| layer.as_object_layer())
        .ok_or_else(|| ExtractError::MissingLayer {
            name: layer_name.to_string(),
        })?;

    Ok(object_layer
        .objects()
        .map(|object| AnnotationObject::from_tiled(&object, map_height))
        .collect())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    const MAP_HEIGHT: f32 = 400.0;

    fn bundled_map() -> tiled::Map {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../assets/ObjectLayer.tmx");
        tiled::Loader::new()
            .load_tmx_map(path)
            .expect("bundled map should parse")
    }

    fn bundled_objects() -> Vec<AnnotationObject> {
        collision_objects(&bundled_map(), "Collisions", MAP_HEIGHT).unwrap()
    }

    #[test]
    fn test_objects_keep_layer_order() {
        let ids: Vec<u32> = bundled_objects().iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_rectangle_is_flipped_to_bottom_left() {
        let objects = bundled_objects();
        let ledge = &objects[1];

        assert_eq!(ledge.name, "ledge");
        // Tiled y=288 with height 16 in a 400 tall map
        assert_eq!(ledge.position, Vec2::new(160.0, 96.0));
        assert_eq!(
            ledge.shape,
            AnnotationShape::Rectangle {
                width: 96.0,
                height: 16.0
            }
        );
    }

    #[test]
    fn test_ellipse_is_flipped_to_bottom_left() {
        let objects = bundled_objects();
        let boulder = &objects[2];

        assert_eq!(boulder.position, Vec2::new(400.0, 68.0));
        assert_eq!(
            boulder.shape,
            AnnotationShape::Ellipse {
                width: 32.0,
                height: 32.0
            }
        );
    }

    #[test]
    fn test_polygon_vertices_flip_sign_only() {
        let objects = bundled_objects();
        let ramp = &objects[3];

        assert_eq!(ramp.position, Vec2::new(480.0, 32.0));
        assert_eq!(
            ramp.shape,
            AnnotationShape::Polygon {
                vertices: vec![
                    Vec2::new(0.0, 0.0),
                    Vec2::new(64.0, 0.0),
                    Vec2::new(64.0, 48.0),
                ]
            }
        );
    }

    #[test]
    fn test_unsupported_shapes_become_other() {
        let objects = bundled_objects();

        assert_eq!(objects[4].shape, AnnotationShape::Other { kind: "point" });
        assert_eq!(
            objects[5].shape,
            AnnotationShape::Other { kind: "polyline" }
        );
    }

    #[test]
    fn test_missing_layer_is_an_error() {
        let error = collision_objects(&bundled_map(), "Walls", MAP_HEIGHT).unwrap_err();
        assert!(matches!(error, ExtractError::MissingLayer { ref name } if name == "Walls"));
    }

    #[test]
    fn test_tile_layer_with_matching_name_is_not_an_object_layer() {
        let error = collision_objects(&bundled_map(), "Ground", MAP_HEIGHT).unwrap_err();
        assert!(matches!(error, ExtractError::MissingLayer { .. }));
    }
}
