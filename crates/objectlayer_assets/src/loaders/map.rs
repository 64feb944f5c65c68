use std::path::Path;

use bevy::{
    asset::{AssetLoader, LoadContext, io::Reader},
    platform::collections::HashMap,
    prelude::*,
    tasks::ConditionalSendFuture,
};
use normalize_path::NormalizePath;
use thiserror::Error;

use crate::assets::map::TiledMapAsset;
use crate::loaders::ASSET_ROOT;

/// Asset loader for Tiled maps (.tmx files)
///
/// Tilesets (embedded or external `.tsx`) are parsed by the `tiled` crate as part of the
/// map. Their atlas images are loaded as dependencies of the map asset.
#[derive(Default)]
pub struct TiledMapAssetLoader;

#[derive(Debug, Error)]
pub enum MapLoaderError {
    #[error("Failed to load map: {0}")]
    TiledError(#[from] tiled::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Map has no tile layer to read the tile size from")]
    NoTileLayer,
}

impl AssetLoader for TiledMapAssetLoader {
    type Asset = TiledMapAsset;
    type Settings = ();
    type Error = MapLoaderError;

    fn load(
        &self,
        _reader: &mut dyn Reader,
        _settings: &Self::Settings,
        load_context: &mut LoadContext,
    ) -> impl ConditionalSendFuture<Output = Result<Self::Asset, Self::Error>> {
        async move {
            // The tiled loader reads directly from the filesystem
            let full_path = Path::new(ASSET_ROOT).join(load_context.asset_path().path());

            let map = tiled::Loader::new().load_tmx_map(&full_path)?;

            if !map.layers().any(|layer| layer.as_tile_layer().is_some()) {
                return Err(MapLoaderError::NoTileLayer);
            }

            // Key by tileset_index (iteration order matches tiled's tileset_index())
            let mut tileset_images = HashMap::default();
            for (tileset_index, tileset) in map.tilesets().iter().enumerate() {
                let Some(ref image) = tileset.image else {
                    warn!(
                        "Tileset '{}' is an image collection, its tiles will not be rendered",
                        tileset.name
                    );
                    continue;
                };

                let image_path = resolve_image_path(&image.source)?;
                let handle: Handle<Image> = load_context.load(image_path);
                tileset_images.insert(tileset_index as u32, handle);
            }

            let (tilemap_size, tile_size, rect) = calculate_map_bounds(&map);

            debug!(
                "Loaded map {} ({}x{} tiles of {}x{})",
                full_path.display(),
                tilemap_size.x,
                tilemap_size.y,
                tile_size.x,
                tile_size.y
            );

            Ok(TiledMapAsset {
                map,
                tileset_images,
                tile_size,
                tilemap_size,
                rect,
            })
        }
    }

    fn extensions(&self) -> &[&str] {
        &["tmx"]
    }
}

/// Calculate map bounds and tile sizes
///
/// # Returns
/// * `(tilemap_size, tile_size, rect)` tuple
fn calculate_map_bounds(map: &tiled::Map) -> (UVec2, UVec2, Rect) {
    // Every tile layer of an orthogonal map shares the map's grid
    let tile_size = UVec2::new(map.tile_width, map.tile_height);
    let tilemap_size = UVec2::new(map.width, map.height);

    let rect_width = map.width as f32 * map.tile_width as f32;
    let rect_height = map.height as f32 * map.tile_height as f32;
    let rect = Rect::new(0.0, 0.0, rect_width, rect_height);

    (tilemap_size, tile_size, rect)
}

/// Resolve an image path produced by the `tiled` loader to a Bevy asset path
///
/// `tiled` joins image sources onto the directory of the file that referenced them, so
/// paths come back as `assets/maps/../tiles/ground.png`. Bevy wants
/// `tiles/ground.png`: normalized, relative to the asset root, forward slashes.
fn resolve_image_path(source: &Path) -> Result<String, MapLoaderError> {
    // Path::join does NOT normalize - it just concatenates
    let normalized = source.normalize();
    let relative = normalized.strip_prefix(ASSET_ROOT).unwrap_or(&normalized);

    let asset_path = relative
        .to_str()
        .ok_or_else(|| {
            MapLoaderError::InvalidPath(format!("Invalid UTF-8 in path: {:?}", normalized))
        })?
        .replace('\\', "/");

    Ok(asset_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundled_map() -> tiled::Map {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../assets/ObjectLayer.tmx");
        tiled::Loader::new()
            .load_tmx_map(path)
            .expect("bundled map should parse")
    }

    #[test]
    fn test_resolve_image_path_strips_asset_root() {
        let path = resolve_image_path(Path::new("assets/maps/../tiles/ground.png")).unwrap();
        assert_eq!(path, "tiles/ground.png");
    }

    #[test]
    fn test_resolve_image_path_keeps_relative_paths() {
        let path = resolve_image_path(Path::new("tiles/./ground.png")).unwrap();
        assert_eq!(path, "tiles/ground.png");
    }

    #[test]
    fn test_map_bounds_from_bundled_map() {
        let map = bundled_map();
        let (tilemap_size, tile_size, rect) = calculate_map_bounds(&map);

        assert_eq!(tile_size, UVec2::new(16, 16));
        assert_eq!(tilemap_size, UVec2::new(40, 25));
        assert_eq!(rect.min, Vec2::ZERO);
        assert_eq!(rect.max, Vec2::new(640.0, 400.0));
    }
}
