use bevy::{platform::collections::HashMap, prelude::*};

/// Bevy asset wrapper for Tiled maps (.tmx files)
#[derive(TypePath, Asset, Debug)]
pub struct TiledMapAsset {
    /// The raw Tiled map data (PRESERVE AS-IS)
    pub map: tiled::Map,

    // ===== BEVY ASSET REFERENCES =====
    /// Tileset atlas images (Bevy asset system)
    /// Key: Tileset index (matches `LayerTile::tileset_index()`)
    ///
    /// Image collection tilesets have no atlas and are absent from this map.
    pub tileset_images: HashMap<u32, Handle<Image>>,

    // ===== PROCESSED DATA FOR BEVY =====
    /// Tile size in pixels, read from the map's tile layers
    pub tile_size: UVec2,

    /// Map size in tiles
    pub tilemap_size: UVec2,

    /// Map bounding box in map units, bottom-left corner at the origin
    pub rect: Rect,
}

impl TiledMapAsset {
    /// Height of the map in map units.
    ///
    /// Tiled measures y downwards from the top edge; subtracting from this value converts
    /// a Tiled y coordinate into the y-up world space used by colliders and tilemaps.
    #[inline]
    pub fn pixel_height(&self) -> f32 {
        self.rect.height()
    }

    /// Get the atlas image for a tileset index, if the tileset has one.
    pub fn tileset_image(&self, tileset_index: u32) -> Option<&Handle<Image>> {
        self.tileset_images.get(&tileset_index)
    }
}
