use crate::driver::TrackerDriver;
use crate::session::Session;
use crate::types::Orientation;
use crate::{Result, VfxError};
use crossbeam_channel::{Receiver, Sender};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

const CHANNEL_CAPACITY: usize = 256;

/// One polled orientation.
#[derive(Debug, Clone, Copy)]
pub struct OrientationSample {
    pub orientation: Orientation,
    /// Seconds since the stream started.
    pub host_timestamp_s: f64,
}

/// Handle to a background poller reading a session at a fixed interval.
///
/// The session moves into the polling thread for the lifetime of the
/// stream, so no other thread can touch it. [`stop`](Self::stop) hands it
/// back; shutting the driver down stays with the caller.
pub struct OrientationStream<D: TrackerDriver + Send + 'static> {
    receiver: Receiver<OrientationSample>,
    stop_flag: Arc<AtomicBool>,
    thread: Option<JoinHandle<Session<D>>>,
}

impl<D: TrackerDriver + Send + 'static> OrientationStream<D> {
    /// Start polling `session` every `interval`.
    pub fn start(session: Session<D>, interval: Duration) -> Result<Self> {
        if !session.state().is_ready() {
            return Err(VfxError::InvalidState {
                operation: "start orientation stream",
                state: session.state(),
            });
        }

        let (sender, receiver) = crossbeam_channel::bounded(CHANNEL_CAPACITY);
        let stop_flag = Arc::new(AtomicBool::new(false));
        let stop_clone = stop_flag.clone();

        let thread = std::thread::Builder::new()
            .name("vfx-poll".into())
            .spawn(move || poll_loop(session, interval, sender, stop_clone))
            .map_err(|e| VfxError::ThreadSpawn(e.to_string()))?;

        Ok(OrientationStream {
            receiver,
            stop_flag,
            thread: Some(thread),
        })
    }

    /// Receive the next sample (blocks until available).
    pub fn recv(&self) -> Result<OrientationSample> {
        self.receiver.recv().map_err(|_| VfxError::StreamStopped)
    }

    /// Try to receive a sample without blocking.
    pub fn try_recv(&self) -> Option<OrientationSample> {
        self.receiver.try_recv().ok()
    }

    /// Receive a sample with a timeout.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<OrientationSample> {
        self.receiver.recv_timeout(timeout).map_err(|e| match e {
            crossbeam_channel::RecvTimeoutError::Timeout => VfxError::Timeout,
            crossbeam_channel::RecvTimeoutError::Disconnected => VfxError::StreamStopped,
        })
    }

    pub fn is_active(&self) -> bool {
        !self.stop_flag.load(Ordering::Relaxed)
    }

    /// Stop polling and return the session.
    pub fn stop(mut self) -> Result<Session<D>> {
        self.join().ok_or(VfxError::StreamStopped)
    }

    fn join(&mut self) -> Option<Session<D>> {
        self.stop_flag.store(true, Ordering::Relaxed);
        let thread = self.thread.take()?;
        match thread.join() {
            Ok(session) => Some(session),
            Err(_) => {
                log::warn!("Polling thread panicked; session lost");
                None
            }
        }
    }
}

impl<D: TrackerDriver + Send + 'static> Drop for OrientationStream<D> {
    fn drop(&mut self) {
        if let Some(mut session) = self.join() {
            log::info!("Orientation stream dropped, shutting tracker down");
            session.shutdown();
        }
    }
}

fn poll_loop<D: TrackerDriver>(
    mut session: Session<D>,
    interval: Duration,
    sender: Sender<OrientationSample>,
    stop_flag: Arc<AtomicBool>,
) -> Session<D> {
    let epoch = Instant::now();
    let mut buf = [0.0f32; 3];

    log::info!("Orientation poller started ({:?} interval)", interval);

    while !stop_flag.load(Ordering::Relaxed) {
        let started = Instant::now();
        session.read_orientation(&mut buf);

        let sample = OrientationSample {
            orientation: Orientation::from_array(buf),
            host_timestamp_s: epoch.elapsed().as_secs_f64(),
        };

        if let Err(e) = sender.try_send(sample) {
            match e {
                crossbeam_channel::TrySendError::Full(_) => {
                    log::trace!("Orientation channel full, dropping sample");
                }
                crossbeam_channel::TrySendError::Disconnected(_) => {
                    log::info!("Orientation channel disconnected, stopping poller");
                    break;
                }
            }
        }

        if let Some(rest) = interval.checked_sub(started.elapsed()) {
            std::thread::sleep(rest);
        }
    }

    log::info!("Orientation poller stopped");
    session
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{DriverCall, SimulatedDriver};
    use crate::types::RawSample;

    #[test]
    fn test_stream_delivers_decoded_samples() {
        let driver = SimulatedDriver::new().with_samples([RawSample::new(0, 0, 65535)]);
        let mut session = Session::new(driver);
        assert!(session.initialize());

        let stream = OrientationStream::start(session, Duration::from_millis(1)).unwrap();
        let first = stream.recv_timeout(Duration::from_secs(2)).unwrap();
        assert_eq!(first.orientation.heading, -180.0);
        assert_eq!(first.orientation.pitch, -180.0);
        assert_eq!(first.orientation.roll, 180.0);

        let session = stream.stop().unwrap();
        assert!(session.state().is_ready());
    }

    #[test]
    fn test_stream_requires_ready_session() {
        let session = Session::new(SimulatedDriver::new());
        assert!(matches!(
            OrientationStream::start(session, Duration::from_millis(1)),
            Err(VfxError::InvalidState { .. })
        ));
    }

    #[test]
    fn test_dropping_stream_shuts_down() {
        let driver = SimulatedDriver::new();
        let handle = driver.handle();
        let mut session = Session::new(driver);
        assert!(session.initialize());

        let stream = OrientationStream::start(session, Duration::from_millis(1)).unwrap();
        stream.recv_timeout(Duration::from_secs(2)).unwrap();
        drop(stream);

        assert_eq!(handle.count(DriverCall::UnloadDriver), 1);
        assert!(handle.count(DriverCall::PollAngles) >= 1);
    }
}
