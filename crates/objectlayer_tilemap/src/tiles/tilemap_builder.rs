//! Converts Tiled tile layers into `bevy_ecs_tilemap` structures.

use std::collections::BTreeMap;

use bevy::prelude::*;
use bevy_ecs_tilemap::prelude::*;
use objectlayer_assets::prelude::TiledMapAsset;

use crate::config::TilemapRenderConfig;

/// One non-empty cell of a tile layer.
///
/// `y` counts rows from the bottom of the layer, matching `bevy_ecs_tilemap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileInstance {
    pub x: u32,
    pub y: u32,
    /// Local tile ID within its tileset (0-based, NOT a GID)
    pub tile_id: u32,
    pub flipped_h: bool,
    pub flipped_v: bool,
    pub flipped_d: bool,
}

/// Builds `bevy_ecs_tilemap` structures from the tile layers of a map asset.
pub struct TilemapBuilder;

impl TilemapBuilder {
    /// Spawn tilemaps for every finite tile layer of the map.
    ///
    /// Layers that use several tilesets get one tilemap per tileset, since
    /// `bevy_ecs_tilemap` requires one tilemap per texture.
    ///
    /// # Returns
    ///
    /// Vec of spawned tilemap entities
    pub fn build(
        commands: &mut Commands,
        map_asset: &TiledMapAsset,
        config: &TilemapRenderConfig,
    ) -> Vec<Entity> {
        let mut tilemaps = Vec::new();

        for (layer_index, layer) in map_asset.map.layers().enumerate() {
            let Some(tile_layer) = layer.as_tile_layer() else {
                continue;
            };

            let tiled::TileLayer::Finite(finite_layer) = tile_layer else {
                warn!("Tile layer '{}' is infinite, skipping", layer.name);
                continue;
            };

            let z = layer_index as f32 * config.layer_z_spacing;

            for (tileset_index, tiles) in Self::group_by_tileset(&finite_layer) {
                let Some(image) = map_asset.tileset_image(tileset_index as u32) else {
                    warn!(
                        "Tileset {} has no atlas image, skipping its tiles in layer '{}'",
                        tileset_index, layer.name
                    );
                    continue;
                };

                let tileset = &map_asset.map.tilesets()[tileset_index];

                tilemaps.push(Self::create_tilemap(
                    commands,
                    &layer.name,
                    tiles,
                    image.clone(),
                    tileset,
                    map_asset.tilemap_size,
                    z,
                ));
            }
        }

        info!("Created {} tilemaps", tilemaps.len());

        tilemaps
    }

    /// Group the cells of a layer by tileset index.
    ///
    /// Flips rows so that `y = 0` is the bottom row: Tiled has (0,0) at top-left,
    /// `bevy_ecs_tilemap` at bottom-left.
    pub fn group_by_tileset(layer: &tiled::FiniteTileLayer) -> BTreeMap<usize, Vec<TileInstance>> {
        let mut grouped: BTreeMap<usize, Vec<TileInstance>> = BTreeMap::new();
        let (width, height) = (layer.width(), layer.height());

        for row in 0..height {
            for x in 0..width {
                let Some(tile) = layer.get_tile(x as i32, row as i32) else {
                    continue;
                };

                grouped
                    .entry(tile.tileset_index())
                    .or_default()
                    .push(TileInstance {
                        x,
                        y: height - 1 - row,
                        tile_id: tile.id(),
                        flipped_h: tile.flip_h,
                        flipped_v: tile.flip_v,
                        flipped_d: tile.flip_d,
                    });
            }
        }

        grouped
    }

    /// Create a single tilemap for a specific tileset.
    fn create_tilemap(
        commands: &mut Commands,
        layer_name: &str,
        tiles: Vec<TileInstance>,
        atlas_image: Handle<Image>,
        tileset: &tiled::Tileset,
        map_size: UVec2,
        z: f32,
    ) -> Entity {
        let map_size = TilemapSize {
            x: map_size.x,
            y: map_size.y,
        };

        let tile_size = TilemapTileSize {
            x: tileset.tile_width as f32,
            y: tileset.tile_height as f32,
        };

        let grid_size = TilemapGridSize {
            x: tileset.tile_width as f32,
            y: tileset.tile_height as f32,
        };

        let mut tile_storage = TileStorage::empty(map_size);

        // Spawn empty tilemap entity first (following bevy_ecs_tilemap pattern)
        let tilemap_entity = commands.spawn_empty().id();

        let mut tile_entities = Vec::with_capacity(tiles.len());

        for tile in tiles {
            let tile_pos = TilePos {
                x: tile.x,
                y: tile.y,
            };

            let tile_entity = commands
                .spawn(TileBundle {
                    position: tile_pos,
                    texture_index: TileTextureIndex(tile.tile_id),
                    tilemap_id: TilemapId(tilemap_entity),
                    flip: TileFlip {
                        x: tile.flipped_h,
                        y: tile.flipped_v,
                        d: tile.flipped_d,
                    },
                    ..default()
                })
                .id();

            tile_storage.set(&tile_pos, tile_entity);
            tile_entities.push(tile_entity);
        }

        commands.entity(tilemap_entity).add_children(&tile_entities);

        // bevy_ecs_tilemap centres TilePos (0,0) on the tilemap origin, shift by half a
        // tile so the bottom-left corner of the map sits at the world origin
        commands.entity(tilemap_entity).insert((
            TilemapBundle {
                grid_size,
                size: map_size,
                storage: tile_storage,
                texture: TilemapTexture::Single(atlas_image),
                tile_size,
                spacing: TilemapSpacing {
                    x: tileset.spacing as f32,
                    y: tileset.spacing as f32,
                },
                map_type: TilemapType::Square,
                transform: Transform::from_xyz(tile_size.x / 2.0, tile_size.y / 2.0, z),
                ..default()
            },
            Name::new(format!("Tile layer: {layer_name}")),
        ));

        tilemap_entity
    }
}
