//! C FFI layer for vfx_hmd.
//!
//! Every call takes an opaque session handle owned by the host. The
//! generated C header is written to `include/vfx_hmd.h` by cbindgen.

use crate::driver::DynDriver;
use crate::error::LastError;
use crate::session::Session;
use crate::sim::SimulatedDriver;
use crate::VfxError;
use std::ffi::{c_char, c_int};

static LAST_ERROR: LastError = LastError::new();

/// Opaque tracker session handle for C consumers.
pub struct VfxSession(Session<DynDriver>);

fn into_handle(driver: DynDriver) -> *mut VfxSession {
    Box::into_raw(Box::new(VfxSession(Session::new(driver))))
}

/// Create a session over the vendor tracker SDK.
/// The session starts uninitialized; call `vfx_initialize` next.
#[cfg(feature = "vendor-sdk")]
#[no_mangle]
pub extern "C" fn vfx_session_new() -> *mut VfxSession {
    into_handle(Box::new(crate::vendor::VendorDriver::new()))
}

/// Create a session over the simulated driver, for hosts without an HMD.
#[no_mangle]
pub extern "C" fn vfx_session_new_simulated() -> *mut VfxSession {
    into_handle(Box::new(SimulatedDriver::new()))
}

/// Free a session. Does not unload the driver; call `vfx_shutdown` first.
///
/// # Safety
/// `session` must be a pointer returned by a `vfx_session_new*` call, or null.
#[no_mangle]
pub unsafe extern "C" fn vfx_session_free(session: *mut VfxSession) {
    if !session.is_null() {
        drop(Box::from_raw(session));
    }
}

/// Load the tracker driver. Returns false when loading fails or `session`
/// is null; check `vfx_last_error()` for the reason.
///
/// # Safety
/// `session` must be a valid session pointer, or null.
#[no_mangle]
pub unsafe extern "C" fn vfx_initialize(session: *mut VfxSession) -> bool {
    let Some(session) = session_mut(session) else {
        return false;
    };
    if session.0.initialize() {
        LAST_ERROR.clear();
        true
    } else {
        if let Some(status) = session.0.last_load_status() {
            LAST_ERROR.set(&VfxError::LoadFailed(status));
        }
        false
    }
}

/// Make the current head orientation the tracker's zero reference.
///
/// # Safety
/// `session` must be a valid session pointer, or null.
#[no_mangle]
pub unsafe extern "C" fn vfx_reset_tracker_zero(session: *mut VfxSession) {
    if let Some(session) = session_mut(session) {
        session.0.reset_tracker_zero();
    }
}

/// Read `[heading, pitch, roll]` in degrees into `out`.
/// Returns 0 on success, -1 if either pointer is null.
///
/// # Safety
/// `session` must be a valid session pointer, or null. `out` must point to
/// at least three writable floats, or be null.
#[no_mangle]
pub unsafe extern "C" fn vfx_read_orientation(session: *mut VfxSession, out: *mut f32) -> c_int {
    let Some(session) = session_mut(session) else {
        return -1;
    };
    if out.is_null() {
        LAST_ERROR.set(&VfxError::NullPointer("orientation buffer"));
        return -1;
    }
    let out = &mut *(out as *mut [f32; 3]);
    session.0.read_orientation(out);
    0
}

/// Enable stereo output. `use_direct3d` selects the Direct3D video mode,
/// otherwise override mode.
///
/// # Safety
/// `session` must be a valid session pointer, or null.
#[no_mangle]
pub unsafe extern "C" fn vfx_enable_stereo(session: *mut VfxSession, use_direct3d: bool) {
    if let Some(session) = session_mut(session) {
        session.0.enable_stereo(use_direct3d);
    }
}

/// Accepted and ignored; stereo stays loaded until `vfx_shutdown`.
///
/// # Safety
/// `session` must be a valid session pointer, or null.
#[no_mangle]
pub unsafe extern "C" fn vfx_disable_stereo(session: *mut VfxSession) {
    if let Some(session) = session_mut(session) {
        session.0.disable_stereo();
    }
}

/// Unload the tracker driver, plus the stereo driver if stereo was enabled.
///
/// # Safety
/// `session` must be a valid session pointer, or null.
#[no_mangle]
pub unsafe extern "C" fn vfx_shutdown(session: *mut VfxSession) {
    if let Some(session) = session_mut(session) {
        session.0.shutdown();
    }
}

/// Current session state: 0 = uninitialized, 1 = ready, 2 = ready with
/// stereo, -1 for a null handle.
///
/// # Safety
/// `session` must be a valid session pointer, or null.
#[no_mangle]
pub unsafe extern "C" fn vfx_session_state(session: *const VfxSession) -> c_int {
    if session.is_null() {
        return -1;
    }
    (*session).0.state() as c_int
}

/// Get the last error message. Returns NULL if no error.
/// The returned pointer is valid until the next vfx_hmd API call.
#[no_mangle]
pub extern "C" fn vfx_last_error() -> *const c_char {
    LAST_ERROR.as_ptr()
}

unsafe fn session_mut<'a>(session: *mut VfxSession) -> Option<&'a mut VfxSession> {
    if session.is_null() {
        LAST_ERROR.set(&VfxError::NullPointer("session"));
        None
    } else {
        Some(&mut *session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_session_lifecycle() {
        unsafe {
            let session = vfx_session_new_simulated();
            assert!(!session.is_null());
            assert_eq!(vfx_session_state(session), 0);

            assert!(vfx_initialize(session));
            assert_eq!(vfx_session_state(session), 1);

            let mut buf = [0.0f32; 3];
            assert_eq!(vfx_read_orientation(session, buf.as_mut_ptr()), 0);
            assert!(buf[0].abs() < 0.01);
            assert!(buf[2].abs() < 0.01);

            vfx_enable_stereo(session, true);
            assert_eq!(vfx_session_state(session), 2);
            vfx_disable_stereo(session);
            assert_eq!(vfx_session_state(session), 2);

            vfx_shutdown(session);
            assert_eq!(vfx_session_state(session), 0);
            vfx_session_free(session);
        }
    }

    #[test]
    fn test_null_handles_are_rejected() {
        unsafe {
            assert!(!vfx_initialize(std::ptr::null_mut()));
            assert_eq!(
                vfx_read_orientation(std::ptr::null_mut(), std::ptr::null_mut()),
                -1
            );
            assert_eq!(vfx_session_state(std::ptr::null()), -1);
            vfx_shutdown(std::ptr::null_mut());
            vfx_session_free(std::ptr::null_mut());

            let session = vfx_session_new_simulated();
            assert_eq!(vfx_read_orientation(session, std::ptr::null_mut()), -1);
            vfx_session_free(session);
        }
    }
}
