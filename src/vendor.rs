//! Tracker driver backed by the vendor VFX3D SDK.
//!
//! The SDK keeps its own process-wide state, so only one `VendorDriver`
//! should be loaded at a time.

use crate::driver::TrackerDriver;
use crate::protocol;
use crate::types::{DriverStatus, RawSample, VideoMode};
use std::ffi::{c_int, c_long};

#[allow(non_snake_case)]
extern "C" {
    fn VFXLoadDll() -> c_int;
    fn VFXFreeDll();
    fn VFXFreeStereoDll();
    fn VFXSetVideoMode(mode: c_int);
    fn VFXZeroSet();
    fn VFXGetTracking(yaw: *mut c_long, pitch: *mut c_long, roll: *mut c_long);
}

/// Driver calling straight into the vendor SDK.
#[derive(Debug, Default)]
pub struct VendorDriver {
    _private: (),
}

impl VendorDriver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TrackerDriver for VendorDriver {
    fn load_driver(&mut self) -> DriverStatus {
        // SAFETY: plain SDK call without arguments.
        DriverStatus(unsafe { VFXLoadDll() })
    }

    fn unload_driver(&mut self) {
        // SAFETY: plain SDK call without arguments.
        unsafe { VFXFreeDll() }
    }

    fn unload_stereo_driver(&mut self) {
        // SAFETY: plain SDK call without arguments.
        unsafe { VFXFreeStereoDll() }
    }

    fn set_video_mode(&mut self, mode: VideoMode) {
        // SAFETY: the mode code is one of the SDK's video mode constants.
        unsafe { VFXSetVideoMode(protocol::video_mode_code(mode)) }
    }

    fn zero_reference(&mut self) {
        // SAFETY: plain SDK call without arguments.
        unsafe { VFXZeroSet() }
    }

    fn poll_angles(&mut self) -> RawSample {
        let mut yaw: c_long = 0;
        let mut pitch: c_long = 0;
        let mut roll: c_long = 0;
        // SAFETY: the three out-pointers are valid locals for the whole call.
        unsafe { VFXGetTracking(&mut yaw, &mut pitch, &mut roll) };
        RawSample::new(yaw as i32, pitch as i32, roll as i32)
    }
}
