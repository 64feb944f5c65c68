use objectlayer_avian::ExtractError;
use thiserror::Error;

/// Errors that stop the scene from being built.
///
/// All of them are fatal: the scene exits instead of running with a partial world.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("Failed to load map '{path}': {reason}")]
    AssetLoad { path: String, reason: String },

    #[error("Failed to build colliders: {0}")]
    Extract(#[from] ExtractError),
}
