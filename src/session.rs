use crate::driver::TrackerDriver;
use crate::protocol;
use crate::types::{DriverStatus, Orientation, SessionFlags, SessionState, VideoMode};

/// A tracker session over one driver.
///
/// Owned by the host and passed to every call. Operations are unguarded:
/// calling them out of order is forwarded to the driver as is, matching
/// the device reference. [`Tracker`](crate::Tracker) layers state checks on top.
///
/// The host must serialize calls; a `Session` is `Send` when its driver
/// is, but is never shared between threads.
pub struct Session<D: TrackerDriver> {
    driver: D,
    flags: SessionFlags,
    load_status: Option<DriverStatus>,
}

impl<D: TrackerDriver> Session<D> {
    /// Create an uninitialized session over `driver`.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            flags: SessionFlags::empty(),
            load_status: None,
        }
    }

    /// Load the tracker driver.
    ///
    /// Clears the stereo flag first. Returns `false` when the driver does
    /// not report success; a missing HMD is an expected outcome, not a fault.
    pub fn initialize(&mut self) -> bool {
        self.flags.remove(SessionFlags::STEREO_LOADED);

        let status = self.driver.load_driver();
        self.load_status = Some(status);
        if status.is_ok() {
            self.flags.insert(SessionFlags::DRIVER_LOADED);
            log::info!("Tracker driver loaded");
            true
        } else {
            self.flags.remove(SessionFlags::DRIVER_LOADED);
            log::warn!("Tracker driver failed to load ({})", status);
            false
        }
    }

    /// Make the current head orientation the zero reference.
    pub fn reset_tracker_zero(&mut self) {
        log::debug!("Resetting tracker zero");
        self.driver.zero_reference();
    }

    /// Poll the tracker once and write `[heading, pitch, roll]` in degrees
    /// into `out`.
    ///
    /// Nothing is allocated, clamped or validated; whatever the driver
    /// leaves in its angles goes through the decode.
    pub fn read_orientation(&mut self, out: &mut [f32; 3]) {
        let raw = self.driver.poll_angles();
        let orientation = protocol::decode_sample(raw);
        log::trace!("raw={:?} -> {:?}", raw, orientation);
        *out = orientation.as_array();
    }

    /// Convenience form of [`read_orientation`](Self::read_orientation)
    /// returning the decoded value.
    pub fn orientation(&mut self) -> Orientation {
        let mut buf = [0.0f32; 3];
        self.read_orientation(&mut buf);
        Orientation::from_array(buf)
    }

    /// Mark stereo as loaded and switch the video mode.
    ///
    /// `true` selects Direct3D, `false` selects override. The mode switch
    /// is re-sent on every call.
    pub fn enable_stereo(&mut self, use_direct3d: bool) {
        if self.flags.contains(SessionFlags::DRIVER_LOADED) {
            self.flags.insert(SessionFlags::STEREO_LOADED);
        } else {
            log::warn!("Stereo enabled on an uninitialized session");
        }

        let mode = VideoMode::from_direct3d(use_direct3d);
        log::info!("Stereo video mode: {:?}", mode);
        self.driver.set_video_mode(mode);
    }

    /// Accepted and ignored. Stereo stays loaded until shutdown.
    pub fn disable_stereo(&mut self) {}

    /// Unload the tracker driver, and the stereo driver if stereo was
    /// enabled. Clears the session back to uninitialized.
    pub fn shutdown(&mut self) {
        self.driver.unload_driver();

        if self.flags.contains(SessionFlags::STEREO_LOADED) {
            self.driver.unload_stereo_driver();
            log::info!("Tracker and stereo drivers unloaded");
        } else {
            log::info!("Tracker driver unloaded");
        }

        self.flags = SessionFlags::empty();
    }

    pub fn state(&self) -> SessionState {
        SessionState::from_flags(self.flags)
    }

    pub fn flags(&self) -> SessionFlags {
        self.flags
    }

    /// Status reported by the most recent `initialize`.
    pub fn last_load_status(&self) -> Option<DriverStatus> {
        self.load_status
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Give back the driver without unloading anything.
    pub fn into_driver(self) -> D {
        self.driver
    }
}

impl<D: TrackerDriver + std::fmt::Debug> std::fmt::Debug for Session<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("driver", &self.driver)
            .field("flags", &self.flags)
            .field("load_status", &self.load_status)
            .finish()
    }
}
