//! Error types.
//!
//! The demo has a single recoverable failure: the sprite atlas could not be
//! turned into a usable texture. Everything else (zero cell size, empty grid,
//! frame-time spikes) is handled as silent degraded behavior.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpriteError {
    /// The atlas image is missing, unreadable or could not be uploaded.
    #[error("Failed to load texture from {path}: {reason}")]
    AssetLoad { path: String, reason: String },
}

pub type Result<T> = std::result::Result<T, SpriteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_load_message_names_path() {
        let err = SpriteError::AssetLoad {
            path: "img/slime.png".to_string(),
            reason: "file not found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to load texture from img/slime.png: file not found"
        );
    }
}
