pub mod map;

/// Directory Bevy's default `AssetPlugin` reads from.
///
/// The `tiled` loader reads from the filesystem directly, so asset paths are joined onto
/// this root before parsing and stripped from it again for dependency handles.
pub const ASSET_ROOT: &str = "assets";
