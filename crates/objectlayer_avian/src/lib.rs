//! `Avian2D` physics for Tiled object layers.
//!
//! Turns the annotation objects of a Tiled object layer into static `Avian2D` bodies.
//! The work is split in two steps that can be used and tested separately:
//!
//! 1. **Extraction** ([`annotation`], [`extract`]): Tiled objects become
//!    [`AnnotationObject`]s in y-up world space, which become [`ColliderDescriptor`]s.
//!    Pure data, no ECS access.
//! 2. **World population** ([`bodies`], [`shapes`]): each descriptor becomes a static,
//!    frictionless rigid body entity.
//!
//! | Tiled shape | Collider |
//! |-------------|----------|
//! | Rectangle | Box centred on the rectangle |
//! | Ellipse (circle only) | Circle anchored at the object's reference point |
//! | Polygon | Convex hull of the vertices, anchored at the object's reference point |
//! | Anything else | Skipped |
//!
//! An ellipse whose width and height differ aborts extraction with
//! [`ExtractError::NonCircularEllipse`].
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use bevy::prelude::*;
//! use objectlayer_avian::prelude::*;
//!
//! fn populate(mut commands: Commands, map: &tiled::Map) -> Result<(), ExtractError> {
//!     let map_height = (map.height * map.tile_height) as f32;
//!     let objects = collision_objects(map, "Collisions", map_height)?;
//!     for descriptor in extract_colliders(&objects)? {
//!         create_static_collider(&mut commands, &descriptor);
//!     }
//!     Ok(())
//! }
//! ```

pub mod annotation;
pub mod bodies;
pub mod config;
pub mod extract;
pub mod plugin;
pub mod shapes;

pub mod prelude {
    //! Common imports for `objectlayer_avian`.

    pub use crate::annotation::{AnnotationObject, AnnotationShape, collision_objects};
    pub use crate::bodies::{MapCollider, STATIC_FRICTION, create_static_collider, static_body};
    pub use crate::config::PhysicsWorldConfig;
    pub use crate::extract::{
        ColliderDescriptor, ColliderShape, ExtractError, extract_collider, extract_colliders,
    };
    pub use crate::plugin::TiledmapAvianPlugin;
}

// Re-export at crate root for convenience
pub use annotation::AnnotationObject;
pub use config::PhysicsWorldConfig;
pub use extract::{ColliderDescriptor, ExtractError};
pub use plugin::TiledmapAvianPlugin;
