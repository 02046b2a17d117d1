//! Runtime Demo
//!
//! Run with: `cargo run --bin runtime-demo [config.json]`
//!
//! Drives the runtime without a window: builds a director, schedules a mix
//! of update callbacks and timers, steps a fixed number of frames, and
//! exercises the pause/resume path halfway through. Pass a config file path
//! to see `runtime.fps` override the frame period.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;

use ember2d_runtime::camera::Camera;
use ember2d_runtime::director::Director;
use ember2d_runtime::scheduler::Timer;

const DEMO_SECONDS: f32 = 3.0;

fn main() {
    env_logger::init();

    let mut director = Director::new();

    if let Some(path) = std::env::args().nth(1) {
        match director.load_config_file(&path) {
            Ok(()) => println!("loaded config from {path}"),
            Err(e) => {
                eprintln!("failed to load {path}: {e}");
                std::process::exit(1);
            }
        }
    }

    let dt = director.animation_interval();
    let frames = (DEMO_SECONDS / dt) as u32;
    println!(
        "stepping {frames} frames at {:.1} fps",
        1.0 / f64::from(dt)
    );

    // A camera nudged along by an update callback
    let camera = Rc::new(RefCell::new(Camera::new()));
    let camera_target = director.allocate_target();
    {
        let camera = Rc::clone(&camera);
        director.scheduler_mut().schedule_update(
            camera_target,
            -1,
            false,
            Box::new(move |dt| {
                let mut camera = camera.borrow_mut();
                let center = camera.center() + Vec3::new(dt, 0.0, 0.0);
                camera.set_center(center);
            }),
        );
    }

    // A per-frame tick counter at default priority
    let ticks = Rc::new(RefCell::new(0u32));
    let tick_target = director.allocate_target();
    {
        let ticks = Rc::clone(&ticks);
        director.scheduler_mut().schedule_update(
            tick_target,
            0,
            false,
            Box::new(move |_| *ticks.borrow_mut() += 1),
        );
    }

    // A half-second heartbeat timer
    let beats = Rc::new(RefCell::new(0u32));
    let beat_target = director.allocate_target();
    {
        let beats = Rc::clone(&beats);
        let heartbeat = Timer::with_interval(
            beat_target,
            Box::new(move |_| *beats.borrow_mut() += 1),
            0.5,
        );
        director.scheduler_mut().schedule(beat_target, heartbeat, false);
    }

    // First half running, a short paused stretch, then resume
    for _ in 0..frames / 2 {
        director.step(dt);
    }

    let paused = director.scheduler_mut().pause_all_targets();
    println!("paused {} targets", paused.len());
    let ticks_while_paused = *ticks.borrow();
    for _ in 0..frames / 4 {
        director.step(dt);
    }
    assert_eq!(*ticks.borrow(), ticks_while_paused);

    director.scheduler_mut().resume_targets(&paused);
    for _ in 0..frames / 4 {
        director.step(dt);
    }

    println!(
        "done: {} frames, {} ticks, {} heartbeats, camera at {}",
        director.total_frames(),
        ticks.borrow(),
        beats.borrow(),
        camera.borrow()
    );
}
