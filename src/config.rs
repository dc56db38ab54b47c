//! Host-tunable settings read from the environment.
//!
//! - `VFX_VIDEO_MODE`: `direct3d` or `override` (default `override`)
//! - `VFX_POLL_INTERVAL_MS`: stream poll interval (default 100)
//! - `VFX_ZERO_ON_START`: reset the tracker zero after load (default on)

use crate::types::VideoMode;
use std::time::Duration;

pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

/// Settings for bringing a tracker up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackerConfig {
    pub video_mode: VideoMode,
    pub poll_interval: Duration,
    pub zero_on_start: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            video_mode: VideoMode::Override,
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            zero_on_start: true,
        }
    }
}

impl TrackerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source. Unparseable values fall
    /// back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let video_mode = match read_string(&lookup, "VFX_VIDEO_MODE").as_deref() {
            Some("direct3d") | Some("d3d") | Some("directx") => VideoMode::Direct3D,
            Some("override") | Some("opengl") => VideoMode::Override,
            Some(other) => {
                log::warn!(
                    "Unknown VFX_VIDEO_MODE='{}', using override (supported: direct3d|override)",
                    other
                );
                defaults.video_mode
            }
            None => defaults.video_mode,
        };

        let poll_interval = lookup("VFX_POLL_INTERVAL_MS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|&ms| ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(defaults.poll_interval);

        let zero_on_start = read_bool(&lookup, "VFX_ZERO_ON_START", defaults.zero_on_start);

        Self {
            video_mode,
            poll_interval,
            zero_on_start,
        }
    }

    /// Flag passed to `enable_stereo` for the configured mode.
    pub fn use_direct3d(&self) -> bool {
        self.video_mode == VideoMode::Direct3D
    }
}

fn read_bool<F: Fn(&str) -> Option<String>>(lookup: &F, name: &str, default: bool) -> bool {
    lookup(name)
        .and_then(|v| {
            let v = v.trim().to_ascii_lowercase();
            match v.as_str() {
                "1" | "true" | "yes" | "on" => Some(true),
                "0" | "false" | "no" | "off" => Some(false),
                _ => None,
            }
        })
        .unwrap_or(default)
}

fn read_string<F: Fn(&str) -> Option<String>>(lookup: &F, name: &str) -> Option<String> {
    lookup(name)
        .map(|v| v.trim().to_ascii_lowercase())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> TrackerConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        TrackerConfig::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config_from(&[]), TrackerConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("VFX_VIDEO_MODE", " Direct3D "),
            ("VFX_POLL_INTERVAL_MS", "16"),
            ("VFX_ZERO_ON_START", "off"),
        ]);
        assert_eq!(config.video_mode, VideoMode::Direct3D);
        assert!(config.use_direct3d());
        assert_eq!(config.poll_interval, Duration::from_millis(16));
        assert!(!config.zero_on_start);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = config_from(&[
            ("VFX_VIDEO_MODE", "vulkan"),
            ("VFX_POLL_INTERVAL_MS", "0"),
            ("VFX_ZERO_ON_START", "maybe"),
        ]);
        assert_eq!(config, TrackerConfig::default());
    }
}
