//! Checked wrapper around a [`Session`].
//!
//! The session itself forwards every call to the driver regardless of
//! state. `Tracker` refuses calls that make no sense any more (after
//! shutdown, stereo enabled twice) with a typed error, and shuts the
//! device down when dropped.

use crate::driver::TrackerDriver;
use crate::session::Session;
use crate::types::{DriverStatus, Orientation, SessionState};
use crate::{Result, VfxError};

/// An initialized HMD tracker.
pub struct Tracker<D: TrackerDriver> {
    session: Session<D>,
    stereo_enabled: bool,
    device_active: bool,
}

impl<D: TrackerDriver> Tracker<D> {
    /// Load the driver and return a ready tracker.
    pub fn open(driver: D) -> Result<Tracker<D>> {
        let mut session = Session::new(driver);
        if !session.initialize() {
            let status = session.last_load_status().unwrap_or(DriverStatus(-1));
            return Err(VfxError::LoadFailed(status));
        }
        Ok(Self::wrap(session))
    }

    /// Wrap a session the host already initialized.
    pub fn from_session(session: Session<D>) -> Result<Tracker<D>> {
        let state = session.state();
        if !state.is_ready() {
            return Err(VfxError::InvalidState {
                operation: "wrap session",
                state,
            });
        }
        Ok(Self::wrap(session))
    }

    fn wrap(session: Session<D>) -> Self {
        let stereo_enabled = session.state() == SessionState::ReadyWithStereo;
        Self {
            session,
            stereo_enabled,
            device_active: true,
        }
    }

    /// Turn on stereo output. `is_direct3d` picks the Direct3D video path,
    /// otherwise the override path is used.
    pub fn enable_stereo(&mut self, is_direct3d: bool) -> Result<()> {
        self.check_active()?;
        if self.stereo_enabled {
            return Err(VfxError::StereoAlreadyEnabled);
        }
        self.session.enable_stereo(is_direct3d);
        self.stereo_enabled = true;
        Ok(())
    }

    /// Turn off stereo output.
    ///
    /// The driver has no way to leave stereo mode, so this only allows a
    /// later `enable_stereo`. The stereo driver is still unloaded at shutdown.
    pub fn disable_stereo(&mut self) -> Result<()> {
        self.check_active()?;
        self.session.disable_stereo();
        self.stereo_enabled = false;
        Ok(())
    }

    /// Reset the zero position of the tracker to its current orientation.
    pub fn reset_zero_position(&mut self) -> Result<()> {
        self.check_active()?;
        self.session.reset_tracker_zero();
        Ok(())
    }

    /// Read `[heading, pitch, roll]` into `out`.
    pub fn read_orientation(&mut self, out: &mut [f32; 3]) -> Result<()> {
        self.check_active()?;
        self.session.read_orientation(out);
        Ok(())
    }

    pub fn orientation(&mut self) -> Result<Orientation> {
        self.check_active()?;
        Ok(self.session.orientation())
    }

    pub fn is_stereo_enabled(&self) -> bool {
        self.stereo_enabled
    }

    /// `false` once [`shutdown_device`](Self::shutdown_device) has run.
    pub fn is_device_active(&self) -> bool {
        self.device_active
    }

    /// Shut the device down. It cannot be restarted afterwards.
    pub fn shutdown_device(&mut self) -> Result<()> {
        self.check_active()?;
        self.session.shutdown();
        self.device_active = false;
        self.stereo_enabled = false;
        Ok(())
    }

    pub fn session(&self) -> &Session<D> {
        &self.session
    }

    fn check_active(&self) -> Result<()> {
        if self.device_active {
            Ok(())
        } else {
            log::warn!("Call on a tracker that has been shut down");
            Err(VfxError::DeviceShutdown)
        }
    }
}

impl<D: TrackerDriver> Drop for Tracker<D> {
    fn drop(&mut self) {
        if self.device_active {
            self.session.shutdown();
            self.device_active = false;
        }
    }
}
