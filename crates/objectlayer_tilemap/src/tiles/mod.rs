pub mod tilemap_builder;
