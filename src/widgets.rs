//! Layout helpers shared by overlays

pub mod popup;
