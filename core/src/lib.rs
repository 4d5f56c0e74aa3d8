pub mod components;
pub mod config;
pub mod geometry;
pub mod manifest;
pub mod page;
pub mod placement;
pub mod resize;
pub mod rng;

pub use components::{ComponentEntry, ComponentMap, ACTIVE_CLASS, NAVIGATION_ID, NAV_LINKS_SELECTOR};
pub use config::{ConfigError, GalleryConfig};
pub use geometry::{LayoutArea, Point, Rect};
pub use manifest::ImageManifest;
pub use page::{current_page_from_path, HOME_PAGE};
pub use placement::{
    layout_desktop, DesktopLayout, PlacementParams, PlacementStrategy, Placer, SearchOutcome,
    MAX_PLACEMENT_ATTEMPTS,
};
pub use resize::{ResizeTracker, REBUILD_WIDTH_DELTA};
pub use rng::{SeededRandom, UnitRandom};
