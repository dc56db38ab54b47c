//! The tracker driver seam.
//!
//! A [`Session`](crate::Session) talks to the hardware only through this
//! trait. The vendor SDK backend lives in `vendor` (feature `vendor-sdk`);
//! [`SimulatedDriver`](crate::sim::SimulatedDriver) stands in when no HMD
//! is attached.

use crate::types::{DriverStatus, RawSample, VideoMode};

/// Operations the underlying tracker driver provides.
///
/// Only `load_driver` reports a status. Every other call is fire and
/// forget: whatever the driver does on failure is absorbed there.
pub trait TrackerDriver {
    /// Load the tracker driver.
    fn load_driver(&mut self) -> DriverStatus;

    /// Unload the tracker driver.
    fn unload_driver(&mut self);

    /// Unload the stereo extension driver.
    fn unload_stereo_driver(&mut self);

    /// Switch the HMD video output mode.
    fn set_video_mode(&mut self, mode: VideoMode);

    /// Make the current physical orientation the new zero reference.
    fn zero_reference(&mut self);

    /// Poll the current raw angles. One poll, no buffering.
    fn poll_angles(&mut self) -> RawSample;
}

impl<D: TrackerDriver + ?Sized> TrackerDriver for Box<D> {
    fn load_driver(&mut self) -> DriverStatus {
        (**self).load_driver()
    }

    fn unload_driver(&mut self) {
        (**self).unload_driver()
    }

    fn unload_stereo_driver(&mut self) {
        (**self).unload_stereo_driver()
    }

    fn set_video_mode(&mut self, mode: VideoMode) {
        (**self).set_video_mode(mode)
    }

    fn zero_reference(&mut self) {
        (**self).zero_reference()
    }

    fn poll_angles(&mut self) -> RawSample {
        (**self).poll_angles()
    }
}

/// Boxed driver used behind the C ABI.
pub type DynDriver = Box<dyn TrackerDriver + Send>;
