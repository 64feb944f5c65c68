//! Physics world configuration.

use bevy::prelude::*;

/// Configuration for the physics world the map colliders live in.
///
/// # Example
///
/// ```rust,no_run
/// use bevy::prelude::*;
/// use objectlayer_avian::{PhysicsWorldConfig, TiledmapAvianPlugin};
///
/// App::new().add_plugins(TiledmapAvianPlugin::new(PhysicsWorldConfig {
///     debug_render: false,
///     ..default()
/// }));
/// ```
#[derive(Resource, Debug, Clone)]
pub struct PhysicsWorldConfig {
    /// World gravity (default: `(0, -9.81)`)
    pub gravity: Vec2,

    /// Solver substeps per physics step (default: 6)
    ///
    /// Avian's substepping solver relaxes velocities and positions together inside each
    /// substep, so this single count plays the role of the velocity iterations.
    pub substeps: u32,

    /// Draw every collider with Avian's debug gizmos (default: true)
    pub debug_render: bool,
}

/// Velocity iterations the world is stepped with unless configured otherwise.
pub const VELOCITY_ITERATIONS: u32 = 6;

impl Default for PhysicsWorldConfig {
    fn default() -> Self {
        Self {
            gravity: Vec2::new(0.0, -9.81),
            substeps: VELOCITY_ITERATIONS,
            debug_render: true,
        }
    }
}
