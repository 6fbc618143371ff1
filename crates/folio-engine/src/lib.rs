pub mod api;
pub mod core;
pub mod gallery;
pub mod parallax;
pub mod layout;
pub mod input;
pub mod bridge;

// Re-export key types at crate root for convenience
pub use api::config::FolioConfig;
pub use api::error::{FolioError, Result};
pub use api::runtime::FolioRuntime;
pub use api::types::{ItemId, Direction, FolioEvent};
pub use core::spring::{spring_step, Spring2, SpringParams, SpringState};
pub use core::time::FrameClock;
pub use gallery::collection::{MediaCollection, MediaItem};
pub use gallery::navigator::Navigator;
pub use gallery::flip::{FlipCard, CardFace};
pub use parallax::engine::ParallaxEngine;
pub use parallax::transform::SceneTransform;
pub use layout::viewport::{Bounds, LayoutMode, Viewport};
pub use input::queue::{InputEvent, InputQueue, KEY_ESCAPE};
pub use input::gesture::{decide_swipe, DragGesture, SwipeDecision};
pub use bridge::protocol::ProtocolLayout;
