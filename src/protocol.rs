use crate::types::{Orientation, RawSample, VideoMode};

// -- Raw angle encoding --

/// Raw value spanning one full turn on every axis.
pub const RAW_FULL_SCALE: f32 = 65535.0;
pub const RAW_MAX: i32 = 65535;

/// Pitch band observed on real hardware (head fully down .. fully up).
pub const PITCH_OPERATIONAL_MIN: i32 = 20025;
pub const PITCH_OPERATIONAL_MAX: i32 = 45511;

const DEGREES_PER_TURN: f32 = 360.0;
const HALF_TURN: f32 = 180.0;

// -- Vendor SDK codes --

/// Success status of the driver load call.
pub const VFX_OK: i32 = 0;

/// Video mode argument for Direct3D stereo.
pub const VFX_DIRECTX: i32 = 0;
/// Video mode argument for override (OpenGL) stereo.
pub const VFX_OVERRIDE: i32 = 1;

/// Map a video mode onto the vendor SDK argument.
pub fn video_mode_code(mode: VideoMode) -> i32 {
    match mode {
        VideoMode::Direct3D => VFX_DIRECTX,
        VideoMode::Override => VFX_OVERRIDE,
    }
}

/// Decode one raw axis into degrees: `raw * 360 / 65535 - 180`.
///
/// Evaluated in `f32` in this exact order so results match the device
/// reference bit for bit. `0 -> -180`, `32768 -> ~0.0027`, `65535 -> 180`.
pub fn decode_axis(raw: i32) -> f32 {
    ((raw as f32 * DEGREES_PER_TURN) / RAW_FULL_SCALE) - HALF_TURN
}

/// Decode the pitch axis: `-(raw * 360 / 65535) - 180`.
///
/// The sign is inverted relative to yaw and roll. The result lands one
/// turn below the nominal range (`45511 -> ~-430`, `20025 -> ~-290`);
/// [`Orientation::normalized`] folds it back to `~-70 .. ~70`.
pub fn decode_pitch(raw: i32) -> f32 {
    -((raw as f32 * DEGREES_PER_TURN) / RAW_FULL_SCALE) - HALF_TURN
}

/// Transform a raw sample into degrees. No clamping or range checks.
pub fn decode_sample(raw: RawSample) -> Orientation {
    Orientation {
        heading: decode_axis(raw.yaw),
        pitch: decode_pitch(raw.pitch),
        roll: decode_axis(raw.roll),
    }
}

/// Whether a raw pitch lies inside the operationally observed band.
pub fn pitch_in_operational_band(raw: i32) -> bool {
    (PITCH_OPERATIONAL_MIN..=PITCH_OPERATIONAL_MAX).contains(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_endpoints() {
        assert_eq!(decode_axis(0), -180.0);
        assert_eq!(decode_axis(RAW_MAX), 180.0);
    }

    #[test]
    fn test_heading_midpoint_is_not_exactly_zero() {
        let mid = decode_axis(32768);
        assert!(mid > 0.0);
        assert!((mid - 0.00275).abs() < 1e-4, "got {}", mid);
    }

    #[test]
    fn test_heading_monotonic_and_bounded() {
        let mut prev = decode_axis(0);
        for raw in (1..=RAW_MAX).step_by(97) {
            let deg = decode_axis(raw);
            assert!(deg >= prev);
            assert!((-180.0..=180.0).contains(&deg));
            prev = deg;
        }
    }

    #[test]
    fn test_pitch_sign_inversion() {
        let up = decode_pitch(PITCH_OPERATIONAL_MAX);
        let down = decode_pitch(PITCH_OPERATIONAL_MIN);

        // Raw formula output, one turn below the documented band.
        assert!((up - (-430.005)).abs() < 1e-2, "got {}", up);
        assert!((down - (-290.002)).abs() < 1e-2, "got {}", down);

        // Higher raw pitch gives a lower value, the opposite of yaw/roll.
        assert!(up < down);

        // Folded back into range this is the documented -70 / +70.
        let up = Orientation { pitch: up, ..Default::default() }.normalized().pitch;
        let down = Orientation { pitch: down, ..Default::default() }.normalized().pitch;
        assert!((up - (-70.0)).abs() < 1e-2, "got {}", up);
        assert!((down - 70.0).abs() < 1e-2, "got {}", down);
    }

    #[test]
    fn test_pitch_above_band_passes_through() {
        let beyond = decode_pitch(50000);
        assert!(beyond < decode_pitch(PITCH_OPERATIONAL_MAX));
        assert!(!pitch_in_operational_band(50000));
        assert!(pitch_in_operational_band(30000));
    }

    #[test]
    fn test_roll_matches_heading_bitwise() {
        for raw in [0, 1, 12345, 32768, 45511, RAW_MAX] {
            let o = decode_sample(RawSample::new(raw, 0, raw));
            assert_eq!(o.heading.to_bits(), o.roll.to_bits());
        }
    }

    #[test]
    fn test_video_mode_codes() {
        assert_eq!(video_mode_code(VideoMode::Direct3D), VFX_DIRECTX);
        assert_eq!(video_mode_code(VideoMode::Override), VFX_OVERRIDE);
    }
}
