/// Raw orientation triple as reported by the tracker driver.
///
/// Each axis is a 16-bit unsigned encoding of one full turn. The driver
/// hands them out as C `long`s, so values outside `0..=65535` are not
/// rejected here; they flow through the decode unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawSample {
    /// Horizontal direction.
    pub yaw: i32,
    /// Head up/down. Operationally observed within `20025..=45511`.
    pub pitch: i32,
    /// Head tilt.
    pub roll: i32,
}

impl RawSample {
    pub const fn new(yaw: i32, pitch: i32, roll: i32) -> Self {
        Self { yaw, pitch, roll }
    }
}

/// Decoded head orientation in degrees.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Orientation {
    /// Turn left/right, nominally `[-180, 180]`.
    pub heading: f32,
    /// Look up/down. Carries the driver's inverted sign and sits one turn
    /// below the nominal band; see [`Orientation::normalized`].
    pub pitch: f32,
    /// Head tilt, nominally `[-180, 180]`.
    pub roll: f32,
}

impl Orientation {
    /// Values in buffer order: `[heading, pitch, roll]`.
    pub fn as_array(&self) -> [f32; 3] {
        [self.heading, self.pitch, self.roll]
    }

    pub fn from_array(values: [f32; 3]) -> Self {
        Self {
            heading: values[0],
            pitch: values[1],
            roll: values[2],
        }
    }

    /// Wrap every axis into `(-180, 180]`.
    ///
    /// The session never does this on its own. For pitch this maps the
    /// operational band back onto roughly `[-70, 70]`.
    pub fn normalized(&self) -> Self {
        Self {
            heading: wrap_degrees(self.heading),
            pitch: wrap_degrees(self.pitch),
            roll: wrap_degrees(self.roll),
        }
    }
}

fn wrap_degrees(deg: f32) -> f32 {
    let wrapped = (deg + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped == -180.0 {
        180.0
    } else {
        wrapped
    }
}

/// Stereo video output mode of the HMD driver.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoMode {
    /// Stereo through the Direct3D path.
    Direct3D = 0,
    /// Stereo by overriding the video output (OpenGL renderers).
    Override = 1,
}

impl VideoMode {
    /// Mode selected by the host's "use Direct3D" flag.
    pub fn from_direct3d(use_direct3d: bool) -> Self {
        if use_direct3d {
            VideoMode::Direct3D
        } else {
            VideoMode::Override
        }
    }
}

/// Status code returned by the driver's load call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverStatus(pub i32);

impl DriverStatus {
    pub const OK: DriverStatus = DriverStatus(crate::protocol::VFX_OK);

    pub fn is_ok(self) -> bool {
        self == Self::OK
    }
}

impl std::fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "status {}", self.0)
    }
}

bitflags::bitflags! {
    /// Resources currently held by a session.
    ///
    /// `STEREO_LOADED` is never set without `DRIVER_LOADED`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SessionFlags: u8 {
        const DRIVER_LOADED = 1 << 0;
        const STEREO_LOADED = 1 << 1;
    }
}

/// Lifecycle state of a tracker session.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized = 0,
    Ready = 1,
    ReadyWithStereo = 2,
}

impl SessionState {
    pub fn from_flags(flags: SessionFlags) -> Self {
        if !flags.contains(SessionFlags::DRIVER_LOADED) {
            SessionState::Uninitialized
        } else if flags.contains(SessionFlags::STEREO_LOADED) {
            SessionState::ReadyWithStereo
        } else {
            SessionState::Ready
        }
    }

    /// Whether tracking calls are within contract.
    pub fn is_ready(self) -> bool {
        self != SessionState::Uninitialized
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SessionState::Uninitialized => "uninitialized",
            SessionState::Ready => "ready",
            SessionState::ReadyWithStereo => "ready (stereo)",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_mode_mapping() {
        assert_eq!(VideoMode::from_direct3d(true), VideoMode::Direct3D);
        assert_eq!(VideoMode::from_direct3d(false), VideoMode::Override);
    }

    #[test]
    fn test_state_from_flags() {
        assert_eq!(
            SessionState::from_flags(SessionFlags::empty()),
            SessionState::Uninitialized
        );
        assert_eq!(
            SessionState::from_flags(SessionFlags::DRIVER_LOADED),
            SessionState::Ready
        );
        assert_eq!(
            SessionState::from_flags(SessionFlags::all()),
            SessionState::ReadyWithStereo
        );
    }

    #[test]
    fn test_normalized_wraps_into_half_open_range() {
        let o = Orientation {
            heading: -180.0,
            pitch: -430.0,
            roll: 190.0,
        }
        .normalized();
        assert_eq!(o.heading, 180.0);
        assert!((o.pitch - (-70.0)).abs() < 1e-3);
        assert!((o.roll - (-170.0)).abs() < 1e-3);
    }

    #[test]
    fn test_array_order() {
        let o = Orientation::from_array([1.0, 2.0, 3.0]);
        assert_eq!(o.heading, 1.0);
        assert_eq!(o.pitch, 2.0);
        assert_eq!(o.roll, 3.0);
        assert_eq!(o.as_array(), [1.0, 2.0, 3.0]);
    }
}
