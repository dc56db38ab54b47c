use crate::types::{DriverStatus, SessionState};
use std::fmt;

/// Errors reported by the checked tracker API and the orientation stream.
///
/// The raw [`Session`](crate::Session) never returns these; its only
/// failure channel is the `bool` from `initialize`.
#[derive(Debug, thiserror::Error)]
pub enum VfxError {
    #[error("Tracker driver failed to load ({0})")]
    LoadFailed(DriverStatus),

    #[error("Cannot {operation} while session is {state}")]
    InvalidState {
        operation: &'static str,
        state: SessionState,
    },

    #[error("VFX device has been shut down")]
    DeviceShutdown,

    #[error("The stereo system is already running")]
    StereoAlreadyEnabled,

    #[error("Orientation stream stopped")]
    StreamStopped,

    #[error("Timeout waiting for orientation")]
    Timeout,

    #[error("Failed to spawn polling thread: {0}")]
    ThreadSpawn(String),

    #[error("Null pointer passed for {0}")]
    NullPointer(&'static str),
}

/// Thread-safe last-error storage for the C FFI layer.
pub(crate) struct LastError {
    message: std::sync::Mutex<String>,
}

impl LastError {
    pub const fn new() -> Self {
        Self {
            message: std::sync::Mutex::new(String::new()),
        }
    }

    pub fn set(&self, err: &VfxError) {
        if let Ok(mut msg) = self.message.lock() {
            *msg = fmt::format(format_args!("{}\0", err));
        }
    }

    pub fn clear(&self) {
        if let Ok(mut msg) = self.message.lock() {
            msg.clear();
        }
    }

    pub fn as_ptr(&self) -> *const std::ffi::c_char {
        match self.message.lock() {
            Ok(msg) if !msg.is_empty() => msg.as_ptr() as *const std::ffi::c_char,
            _ => std::ptr::null(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_error_round_trip() {
        let last = LastError::new();
        assert!(last.as_ptr().is_null());

        last.set(&VfxError::DeviceShutdown);
        let msg = unsafe { std::ffi::CStr::from_ptr(last.as_ptr()) };
        assert_eq!(msg.to_str().unwrap(), "VFX device has been shut down");

        last.clear();
        assert!(last.as_ptr().is_null());
    }

    #[test]
    fn test_invalid_state_message() {
        let err = VfxError::InvalidState {
            operation: "read orientation",
            state: SessionState::Uninitialized,
        };
        assert_eq!(
            err.to_string(),
            "Cannot read orientation while session is uninitialized"
        );
    }
}
