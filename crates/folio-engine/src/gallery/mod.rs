// gallery/mod.rs
//
// Grid, lightbox and card state for the media gallery.

pub mod collection;
pub mod flip;
pub mod navigator;
