//! Static body creation.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::extract::ColliderDescriptor;
use crate::shapes;

/// Surface friction of every body created from a descriptor.
///
/// Colliders only describe collision geometry, no sliding resistance is modelled.
pub const STATIC_FRICTION: f32 = 0.0;

/// Marker for bodies built from map annotation objects.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapCollider {
    /// Tiled object ID the body was built from
    pub object_id: u32,
}

/// Components of a static body built from a [`ColliderDescriptor`].
#[derive(Bundle)]
pub struct StaticColliderBundle {
    pub marker: MapCollider,
    pub rigid_body: RigidBody,
    pub collider: Collider,
    pub friction: Friction,
    pub transform: Transform,
}

/// Build the components of a static body for a descriptor.
///
/// The friction combine rule is `Min` so that a zero-friction wall stays frictionless
/// against any dynamic body touching it.
pub fn static_body(descriptor: &ColliderDescriptor) -> StaticColliderBundle {
    StaticColliderBundle {
        marker: MapCollider {
            object_id: descriptor.object_id,
        },
        rigid_body: RigidBody::Static,
        collider: shapes::collider_for(&descriptor.shape),
        friction: Friction::new(STATIC_FRICTION).with_combine_rule(CoefficientCombine::Min),
        transform: Transform::from_xyz(descriptor.anchor.x, descriptor.anchor.y, 0.0),
    }
}

/// Create a static body in the physics world and return its entity.
///
/// The collider is moved into the body, nothing else keeps a reference to it.
pub fn create_static_collider(commands: &mut Commands, descriptor: &ColliderDescriptor) -> Entity {
    let entity = commands
        .spawn((
            static_body(descriptor),
            Name::new(format!("Collider: object {}", descriptor.object_id)),
        ))
        .id();

    debug!(
        "Created static collider {:?} for object {} at {}",
        entity, descriptor.object_id, descriptor.anchor
    );

    entity
}
