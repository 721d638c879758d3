//! Validated snapshots of the bridge resources this crate understands.
//!
//! A snapshot is what the bridge reported at fetch time. To change a resource,
//! build a [`crate::patch::Patch`] and send it; the snapshot itself is never
//! written back.

mod device;
mod group;
mod light;
mod scene;

pub use device::Device;
pub use group::{GroupedLight, Room, Zone};
pub use light::Light;
pub use scene::{LightAction, Scene, SceneAction};
