//! # vfx_hmd - Rust binding for the VFX3D head-mounted display tracker
//!
//! Wraps the vendor tracker driver behind an explicit session object.
//! Provides:
//! - Driver lifecycle (load, zero, stereo video mode, unload)
//! - Raw angle decode into heading/pitch/roll degrees
//! - A checked [`Tracker`] facade and a background [`OrientationStream`]
//! - C FFI for host runtimes that cannot call the driver directly
//!
//! ## Quick Start
//! ```no_run
//! use vfx_hmd::sim::SimulatedDriver;
//! use vfx_hmd::Session;
//!
//! let mut session = Session::new(SimulatedDriver::new());
//! if session.initialize() {
//!     let mut orientation = [0.0f32; 3];
//!     session.read_orientation(&mut orientation);
//!     println!("heading={} pitch={} roll={}", orientation[0], orientation[1], orientation[2]);
//!     session.shutdown();
//! }
//! ```

pub mod error;
pub mod types;
pub mod protocol;
pub mod driver;
pub mod sim;
#[cfg(feature = "vendor-sdk")]
pub mod vendor;
pub mod session;
pub mod tracker;
pub mod stream;
pub mod config;
pub mod ffi;

pub use error::VfxError;
pub use types::*;
pub use driver::TrackerDriver;
pub use session::Session;
pub use tracker::Tracker;
pub use stream::{OrientationSample, OrientationStream};
pub use config::TrackerConfig;

/// Result type alias for vfx_hmd operations.
pub type Result<T> = std::result::Result<T, VfxError>;
