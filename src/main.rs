//! Skyflap entry point
//!
//! Runs a headless autopilot demo of the simulation core. Rendering
//! front-ends link the library and drive `Session::frame` from their own
//! refresh callback instead.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::SystemTime;

    use skyflap::consts::SIM_DT;
    use skyflap::persistence::FileStore;
    use skyflap::scheduler::Session;
    use skyflap::sim::GamePhase;

    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0);

    let mut session = Session::new(seed, FileStore::new(".skyflap_best.json"));
    log::info!("Skyflap demo starting (seed {seed}, best {})", session.best());

    session.set_autopilot(true);
    session.start();

    // Ten simulated minutes, or until the pilot crashes.
    let max_frames = 10 * 60 * 60;
    let mut frames = 0u32;
    for _ in 0..max_frames {
        session.frame(SIM_DT, |_world| {});
        frames += 1;
        if session.phase() == GamePhase::GameOver {
            break;
        }
    }

    log::info!("Demo finished after {frames} frames");
    println!("score {}  best {}", session.score(), session.best());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser front-ends use the library crate directly; this binary is
    // native-only.
}
