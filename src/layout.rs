//! Layout module for tracking UI component regions
//!
//! `LayoutRegions` records where components were drawn on the last frame and
//! `region_at()` tells which one sits under a screen position.

mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{LayoutRegions, Region};
