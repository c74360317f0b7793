//! Procedural light rig for the room.
//!
//! After the room asset loads, fixtures are attached to named anchor nodes:
//! - [`anchor`] resolves catalog names against the scene graph
//! - [`fixture`] builds a spot or LED strip fixture under one anchor
//! - [`assembler`] walks whole catalogs and reports what was built
//! - [`lighting`] adds scene-wide ambient, key and fill lights

pub mod anchor;
pub mod assembler;
pub mod catalog;
pub mod fixture;
pub mod lighting;

pub use anchor::{Anchor, resolve, resolve_all};
pub use assembler::{RigAssembler, RigReport, RigSummary, assemble_spots, assemble_strips};
pub use catalog::{SPOT_ANCHORS, STRIP_ANCHORS, default_strip_configs};
pub use fixture::{Fixture, FixtureClass, synthesize};
pub use lighting::{BaseLights, base_lighting};
pub use roomview_core::FixtureConfig;
