//! Client library for the local REST API (CLIP v2) of Philips Hue bridges.
//!
//! Every value a bridge returns is validated when it is decoded: a brightness
//! of 150 % or a mirek of 20 is an error naming the offending field, never a
//! silently clamped value. Changes are described as a [`patch::Patch`] and
//! checked against the fields each resource kind accepts before anything is
//! sent.
//!
//! ### Example
//! ```no_run
//! # tokio_test::block_on(async {
//! use hueclient::patch::Patch;
//! use hueclient::value::Brightness;
//!
//! let bridge = hueclient::BridgeConfig::new("192.168.0.4", "rVV05G0i52vQMMLn6BK3dpr0F3uDiqtDjPLPK2uj")
//!     .connect()
//!     .unwrap();
//! let lights = bridge.lights();
//! for light in lights.list().await.unwrap().resources {
//!     let patch = Patch::new().on().with_brightness(Brightness::new(50.0).unwrap());
//!     lights.update(&light.id, &patch).await.unwrap();
//! }
//! # })
//! ```

pub mod api;
pub mod bridge;
pub mod codec;
mod error;
pub mod patch;
pub mod resource;
pub mod transport;
pub mod value;
pub mod wire;

#[cfg(test)]
mod fixtures;

pub use api::ResourceApi;
pub use bridge::{Bridge, BridgeConfig};
pub use error::{DecodeError, DecodeErrorKind, HueError, InvalidValue, TransportError};
pub use transport::Transport;

pub type Result<T> = std::result::Result<T, HueError>;
