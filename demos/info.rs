//! Bring the tracker up, print one orientation, and shut it down.
//!
//! Usage: cargo run --example info [--features vendor-sdk]

use vfx_hmd::{Session, TrackerDriver};

#[cfg(feature = "vendor-sdk")]
fn driver() -> impl TrackerDriver {
    vfx_hmd::vendor::VendorDriver::new()
}

#[cfg(not(feature = "vendor-sdk"))]
fn driver() -> impl TrackerDriver {
    vfx_hmd::sim::SimulatedDriver::new()
}

fn main() {
    env_logger::init();

    let mut session = Session::new(driver());
    if !session.initialize() {
        eprintln!(
            "Failed to load tracker driver ({:?})",
            session.last_load_status()
        );
        std::process::exit(1);
    }

    let o = session.orientation();
    println!("State:    {}", session.state());
    println!("Heading:  {:+.3}", o.heading);
    println!("Pitch:    {:+.3} (normalized {:+.3})", o.pitch, o.normalized().pitch);
    println!("Roll:     {:+.3}", o.roll);

    session.shutdown();
}
