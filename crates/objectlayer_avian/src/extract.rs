//! Annotation objects to static collider descriptors.

use bevy::prelude::*;
use thiserror::Error;

use crate::annotation::{AnnotationObject, AnnotationShape};

/// Shape of a static collider, in the terms the physics world is built from.
#[derive(Debug, Clone, PartialEq)]
pub enum ColliderShape {
    /// Box centred on the anchor
    Box { half_width: f32, half_height: f32 },
    /// Circle centred on the anchor
    Circle { radius: f32 },
    /// Polygon with vertices relative to the anchor
    Polygon { vertices: Vec<Vec2> },
}

/// Everything needed to create one static body.
///
/// Descriptors are always for static bodies.
#[derive(Debug, Clone, PartialEq)]
pub struct ColliderDescriptor {
    /// Tiled object ID the collider was built from
    pub object_id: u32,
    /// Body position in world space
    pub anchor: Vec2,
    pub shape: ColliderShape,
}

#[derive(Debug, Error, PartialEq)]
pub enum ExtractError {
    #[error("Map has no object layer named '{name}'")]
    MissingLayer { name: String },

    #[error("Only circles are allowed: ellipse object {id} is {width}x{height}")]
    NonCircularEllipse { id: u32, width: f32, height: f32 },
}

/// Build the collider descriptor for a single annotation object.
///
/// Returns `Ok(None)` for shapes that do not produce a collider.
///
/// # Errors
///
/// [`ExtractError::NonCircularEllipse`] when an ellipse's width and height differ.
pub fn extract_collider(
    object: &AnnotationObject,
) -> Result<Option<ColliderDescriptor>, ExtractError> {
    let (anchor, shape) = match &object.shape {
        AnnotationShape::Rectangle { width, height } => (
            object.position + Vec2::new(width / 2.0, height / 2.0),
            ColliderShape::Box {
                half_width: width / 2.0,
                half_height: height / 2.0,
            },
        ),

        AnnotationShape::Ellipse { width, height } => {
            if width != height {
                return Err(ExtractError::NonCircularEllipse {
                    id: object.id,
                    width: *width,
                    height: *height,
                });
            }

            // Anchored at the box corner, not the centre (unlike rectangles). The circle
            // ends up offset by its radius from where it is drawn in Tiled.
            (
                object.position,
                ColliderShape::Circle {
                    radius: width / 2.0,
                },
            )
        }

        AnnotationShape::Polygon { vertices } => (
            object.position,
            ColliderShape::Polygon {
                vertices: vertices.clone(),
            },
        ),

        AnnotationShape::Other { kind } => {
            debug!(
                "Skipping {} object {} ('{}'), no collider for this shape",
                kind, object.id, object.name
            );
            return Ok(None);
        }
    };

    Ok(Some(ColliderDescriptor {
        object_id: object.id,
        anchor,
        shape,
    }))
}

/// Build collider descriptors for every supported object, in iteration order.
///
/// Stops at the first invalid object: nothing after it is looked at and no descriptors
/// are returned.
pub fn extract_colliders<'a>(
    objects: impl IntoIterator<Item = &'a AnnotationObject>,
) -> Result<Vec<ColliderDescriptor>, ExtractError> {
    let mut descriptors = Vec::new();

    for object in objects {
        if let Some(descriptor) = extract_collider(object)? {
            descriptors.push(descriptor);
        }
    }

    Ok(descriptors)
}
