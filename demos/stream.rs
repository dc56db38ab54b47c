//! Stream head orientation to stdout.
//!
//! Usage: cargo run --example stream [--features vendor-sdk]
//! Settings come from VFX_VIDEO_MODE, VFX_POLL_INTERVAL_MS, VFX_ZERO_ON_START.
//! Press Ctrl+C to stop.

use std::time::{Duration, Instant};
use vfx_hmd::{OrientationStream, Session, TrackerConfig, TrackerDriver};

#[cfg(feature = "vendor-sdk")]
fn driver() -> impl TrackerDriver + Send + 'static {
    vfx_hmd::vendor::VendorDriver::new()
}

#[cfg(not(feature = "vendor-sdk"))]
fn driver() -> impl TrackerDriver + Send + 'static {
    use vfx_hmd::sim::SimulatedDriver;
    use vfx_hmd::RawSample;

    // Slow sweep left to right with the head level.
    let sweep = (0..=65535).step_by(256).map(|yaw| RawSample::new(yaw, 32768, 32768));
    SimulatedDriver::new().with_samples(sweep)
}

fn main() {
    env_logger::init();

    let config = TrackerConfig::from_env();
    println!("Config:   {:?}", config);

    let mut session = Session::new(driver());
    if !session.initialize() {
        eprintln!("Failed to load tracker driver ({:?})", session.last_load_status());
        std::process::exit(1);
    }
    if config.zero_on_start {
        session.reset_tracker_zero();
    }
    session.enable_stereo(config.use_direct3d());

    let stream = match OrientationStream::start(session, config.poll_interval) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to start stream: {}", e);
            std::process::exit(1);
        }
    };

    println!("Streaming orientation (Ctrl+C to stop)...");

    let start = Instant::now();
    let mut count: u64 = 0;

    loop {
        match stream.recv_timeout(Duration::from_secs(2)) {
            Ok(sample) => {
                count += 1;
                let o = sample.orientation;
                let n = o.normalized();
                println!(
                    "t={:>8.3}s  heading={:+8.3}  pitch={:+8.3} ({:+7.3})  roll={:+8.3}",
                    sample.host_timestamp_s, o.heading, o.pitch, n.pitch, o.roll,
                );
            }
            Err(vfx_hmd::VfxError::Timeout) => {
                eprintln!("Timeout waiting for orientation");
                break;
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                break;
            }
        }
    }

    let elapsed = start.elapsed().as_secs_f64();
    println!(
        "\nTotal: {} samples in {:.1}s ({:.1} Hz)",
        count,
        elapsed,
        count as f64 / elapsed
    );

    match stream.stop() {
        Ok(mut session) => session.shutdown(),
        Err(e) => eprintln!("Error stopping stream: {}", e),
    }
}
