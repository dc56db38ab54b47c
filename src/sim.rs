//! In-process stand-in for the tracker driver.
//!
//! Records every call in a shared journal and plays back scripted raw
//! samples. Used by tests, the demos, and hosts running without an HMD.

use crate::driver::TrackerDriver;
use crate::types::{DriverStatus, RawSample, VideoMode};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

/// One call made into the simulated driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverCall {
    LoadDriver,
    UnloadDriver,
    UnloadStereoDriver,
    SetVideoMode(VideoMode),
    ZeroReference,
    PollAngles,
}

#[derive(Debug)]
struct SimState {
    load_status: DriverStatus,
    samples: VecDeque<RawSample>,
    /// Returned once the script runs dry; a level head by default.
    resting: RawSample,
    calls: Vec<DriverCall>,
}

/// Simulated tracker driver.
#[derive(Debug, Clone)]
pub struct SimulatedDriver {
    state: Arc<Mutex<SimState>>,
}

/// Inspection handle sharing state with a [`SimulatedDriver`].
///
/// Stays usable after the driver has been moved into a session or stream.
#[derive(Debug, Clone)]
pub struct SimHandle {
    state: Arc<Mutex<SimState>>,
}

/// Raw sample for a level head looking straight ahead.
pub const LEVEL_HEAD: RawSample = RawSample::new(32768, 32768, 32768);

impl SimulatedDriver {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SimState {
                load_status: DriverStatus::OK,
                samples: VecDeque::new(),
                resting: LEVEL_HEAD,
                calls: Vec::new(),
            })),
        }
    }

    /// Make `load_driver` report `status`.
    pub fn with_load_status(self, status: DriverStatus) -> Self {
        lock(&self.state).load_status = status;
        self
    }

    /// Queue raw samples returned by successive polls.
    pub fn with_samples(self, samples: impl IntoIterator<Item = RawSample>) -> Self {
        lock(&self.state).samples.extend(samples);
        self
    }

    pub fn handle(&self) -> SimHandle {
        SimHandle {
            state: self.state.clone(),
        }
    }

    fn record(&self, call: DriverCall) -> MutexGuard<'_, SimState> {
        let mut state = lock(&self.state);
        state.calls.push(call);
        state
    }

    fn note(&self, call: DriverCall) {
        lock(&self.state).calls.push(call);
    }
}

impl Default for SimulatedDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl SimHandle {
    /// Every call made so far, oldest first.
    pub fn calls(&self) -> Vec<DriverCall> {
        lock(&self.state).calls.clone()
    }

    pub fn count(&self, call: DriverCall) -> usize {
        lock(&self.state).calls.iter().filter(|&&c| c == call).count()
    }

    pub fn clear_calls(&self) {
        lock(&self.state).calls.clear();
    }

    pub fn push_sample(&self, sample: RawSample) {
        lock(&self.state).samples.push_back(sample);
    }

    /// Sample returned once the queue is empty.
    pub fn set_resting(&self, sample: RawSample) {
        lock(&self.state).resting = sample;
    }
}

impl TrackerDriver for SimulatedDriver {
    fn load_driver(&mut self) -> DriverStatus {
        let status = self.record(DriverCall::LoadDriver).load_status;
        log::debug!("sim: load driver -> {}", status);
        status
    }

    fn unload_driver(&mut self) {
        self.note(DriverCall::UnloadDriver);
    }

    fn unload_stereo_driver(&mut self) {
        self.note(DriverCall::UnloadStereoDriver);
    }

    fn set_video_mode(&mut self, mode: VideoMode) {
        self.note(DriverCall::SetVideoMode(mode));
    }

    fn zero_reference(&mut self) {
        self.note(DriverCall::ZeroReference);
    }

    fn poll_angles(&mut self) -> RawSample {
        let mut state = self.record(DriverCall::PollAngles);
        let resting = state.resting;
        let sample = state.samples.pop_front().unwrap_or(resting);
        sample
    }
}

// A panic while holding the journal leaves it readable; keep going.
fn lock(state: &Mutex<SimState>) -> MutexGuard<'_, SimState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
