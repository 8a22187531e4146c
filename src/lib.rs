pub mod config;
pub mod grid;
pub mod layout;
pub mod units;

pub use config::{ConfigError, GridConfig, load_config};
pub use grid::{PanelGrid, changed_panels};
pub use layout::{
    GridRect, PanelCoordinate, PanelId, PanelMap, Push, PushDirection, compact_layout,
    constrain_to_grid, detect_collisions, find_placement, has_collision, push_distance, rearrange,
    rectangles_overlap, resolve_push,
};
pub use units::{
    grid_position_to_pixels, grid_to_pixels, pixels_to_grid_position,
    pixels_to_grid_position_clamped, pixels_to_grid_size, pixels_to_grid_size_clamped,
    snap_to_grid,
};
