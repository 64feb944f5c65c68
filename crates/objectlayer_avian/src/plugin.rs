//! Plugin for the `Avian2D` physics world.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::config::PhysicsWorldConfig;

/// Plugin that sets up the `Avian2D` world map colliders are created in.
///
/// This plugin:
/// - Adds [`PhysicsPlugins`] in `PostUpdate`, so each frame is stepped once with the
///   frame's elapsed time instead of a fixed timestep
/// - Sets gravity and the solver substep count from [`PhysicsWorldConfig`]
/// - Adds [`PhysicsDebugPlugin`] when `debug_render` is set, drawing every collider
///   through the active camera after the scene has been rendered
///
/// # Example
///
/// ```rust,no_run
/// use bevy::prelude::*;
/// use objectlayer_avian::TiledmapAvianPlugin;
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(TiledmapAvianPlugin::default())
///     .run();
/// ```
#[derive(Default)]
pub struct TiledmapAvianPlugin {
    /// Physics configuration
    pub config: PhysicsWorldConfig,
}

impl TiledmapAvianPlugin {
    /// Create a new plugin with custom configuration.
    pub fn new(config: PhysicsWorldConfig) -> Self {
        Self { config }
    }
}

impl Plugin for TiledmapAvianPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(PhysicsPlugins::new(PostUpdate));

        if self.config.debug_render {
            app.add_plugins(PhysicsDebugPlugin::default());
        }

        app.insert_resource(Gravity(self.config.gravity))
            .insert_resource(SubstepCount(self.config.substeps))
            .insert_resource(self.config.clone());

        info!(
            "TiledmapAvianPlugin initialized (gravity: {}, substeps: {})",
            self.config.gravity, self.config.substeps
        );
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use bevy::time::TimeUpdateStrategy;

    use super::*;
    use crate::bodies::static_body;
    use crate::extract::{ColliderDescriptor, ColliderShape};

    /// Headless app stepping physics by a fixed 1/60 s per update.
    fn headless_app(config: PhysicsWorldConfig) -> App {
        let mut app = App::new();
        app.add_plugins((
            MinimalPlugins,
            TransformPlugin,
            AssetPlugin::default(),
            bevy::scene::ScenePlugin,
            TiledmapAvianPlugin::new(config),
        ));
        app.init_resource::<Assets<Mesh>>();
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f32(
            1.0 / 60.0,
        )));
        app.finish();
        app.cleanup();
        app
    }

    fn headless_config() -> PhysicsWorldConfig {
        PhysicsWorldConfig {
            debug_render: false,
            ..default()
        }
    }

    #[test]
    fn test_plugin_inserts_gravity_and_substeps() {
        let app = headless_app(headless_config());

        assert_eq!(app.world().resource::<Gravity>().0, Vec2::new(0.0, -9.81));
        assert_eq!(app.world().resource::<SubstepCount>().0, 6);
    }

    #[test]
    fn test_plugin_uses_configured_values() {
        let app = headless_app(PhysicsWorldConfig {
            gravity: Vec2::new(0.0, -20.0),
            substeps: 3,
            debug_render: false,
        });

        assert_eq!(app.world().resource::<Gravity>().0, Vec2::new(0.0, -20.0));
        assert_eq!(app.world().resource::<SubstepCount>().0, 3);
    }

    #[test]
    fn test_static_body_ignores_forces() {
        let mut app = headless_app(headless_config());
        let descriptor = ColliderDescriptor {
            object_id: 1,
            anchor: Vec2::new(24.0, 40.0),
            shape: ColliderShape::Box {
                half_width: 8.0,
                half_height: 8.0,
            },
        };

        let body = app
            .world_mut()
            .spawn((static_body(&descriptor), ConstantForce::new(1.0e6, 1.0e6)))
            .id();

        for _ in 0..20 {
            app.update();
        }

        let position = app.world().get::<Position>(body).expect("body has a position");
        assert_eq!(position.0, Vec2::new(24.0, 40.0));
    }

    #[test]
    fn test_world_steps_every_frame() {
        let mut app = headless_app(headless_config());

        let ball = app
            .world_mut()
            .spawn((
                RigidBody::Dynamic,
                Collider::circle(1.0),
                Transform::from_xyz(0.0, 100.0, 0.0),
            ))
            .id();

        for _ in 0..20 {
            app.update();
        }

        let position = app.world().get::<Position>(ball).expect("ball has a position");
        assert!(position.0.y < 100.0, "ball did not fall: {}", position.0);
        assert_eq!(position.0.x, 0.0);
    }
}
