//! Resource loading and management.
//!
//! This crate handles loading of the room asset:
//! - glTF node hierarchy import into a [`SceneGraph`](roomview_scene::SceneGraph)
//! - Background loading with a one-shot [`LoadState`] transition
//! - Vertical centering of the loaded room

mod error;
pub mod import;
pub mod loader;

pub use error::{ResourceError, ResourceResult};
pub use import::{center_vertically, import_gltf};
pub use loader::{LoadEvent, LoadState, SceneLoader};
