//! Drives a drawer through a scripted gesture session on the std runtime and
//! prints the frames a renderer would draw.
//!
//! `DRAWER_SCREEN_WIDTH` / `DRAWER_SCREEN_HEIGHT` override the simulated
//! screen size. Set `RUST_LOG=debug` (or `trace`) for controller internals.

use std::env;
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use drawer_foundation::PointerEvent;
use drawer_runtime_std::StdRuntime;
use drawer_ui::{
    DrawerCallbacks, DrawerController, DrawerProps, DrawerState, ReleaseOutcome, Viewport,
};
use drawer_ui_graphics::Point;

const DEFAULT_SCREEN: Viewport = Viewport::new(390.0, 844.0);
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const MAX_SETTLE_FRAMES: usize = 600;

fn main() -> Result<()> {
    init_logging();

    let viewport = viewport_from_env()?;
    let up = Point::new(0.0, viewport.height * 0.15);
    let down = Point::new(0.0, viewport.height * 0.75);
    let props = DrawerProps::new(up, down)
        .resting_in(DrawerState::Expanded)
        .with_background_css("#fafafa")?
        .with_rounded_edges(true)
        .with_shadow(true);

    let runtime = StdRuntime::new();
    let callbacks = DrawerCallbacks::new()
        .on_collapsed(|| println!("  -> on_collapsed"))
        .on_expanded(|| println!("  -> on_expanded"))
        .on_drawer_state_set(|state| println!("  -> on_drawer_state_set({})", state.as_u8()))
        .set_current_position(|position| println!("  -> set_current_position(y={})", position.y));
    let mut drawer = DrawerController::new(props, viewport, callbacks, runtime.runtime_handle())
        .context("drawer configuration")?;

    println!("=== Swipe drawer demo ===");
    println!(
        "screen {}x{}, up y={}, down y={}",
        viewport.width, viewport.height, up.y, down.y
    );

    let x = viewport.width / 2.0;
    let script: [(&str, f32, f32); 4] = [
        ("swipe down to collapse", 200.0, 320.0),
        ("small swipe up, snaps back", 700.0, 680.0),
        ("swipe up to expand", 700.0, 560.0),
        ("pull past the top, springs back", 300.0, 0.0),
    ];

    for (label, from_y, to_y) in script {
        println!();
        println!("[{label}] drag {from_y} -> {to_y}");
        let outcome = swipe(&mut drawer, x, from_y, to_y);
        println!(
            "released: {:?}, tracked y={:.2}",
            outcome,
            drawer.position().y
        );
        let frames = settle(&runtime, &drawer)?;
        let frame = drawer.frame();
        println!(
            "settled after {frames} frame(s): state={:?} surface y={:.1}..{:.1}, {:.1} wide",
            drawer.drawer_state(),
            frame.bounds.y,
            frame.bounds.bottom(),
            frame.bounds.width
        );
    }

    Ok(())
}

#[cfg(feature = "logging")]
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

#[cfg(not(feature = "logging"))]
fn init_logging() {}

fn viewport_from_env() -> Result<Viewport> {
    let width = env_dimension("DRAWER_SCREEN_WIDTH", DEFAULT_SCREEN.width)?;
    let height = env_dimension("DRAWER_SCREEN_HEIGHT", DEFAULT_SCREEN.height)?;
    let viewport = Viewport::new(width, height);
    viewport.validate()?;
    Ok(viewport)
}

fn env_dimension(name: &str, default: f32) -> Result<f32> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name}={raw:?} is not a number")),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(err) => Err(err).with_context(|| format!("reading {name}")),
    }
}

fn swipe(drawer: &mut DrawerController, x: f32, from_y: f32, to_y: f32) -> Option<ReleaseOutcome> {
    const STEPS: usize = 6;
    drawer.on_pointer_event(&PointerEvent::down(Point::new(x, from_y)));
    for step in 1..=STEPS {
        let y = from_y + (to_y - from_y) * step as f32 / STEPS as f32;
        drawer.on_pointer_event(&PointerEvent::moved(Point::new(x, y)));
        log::info!("drag sample y={y:.1} -> drawer y={:.2}", drawer.position().y);
    }
    drawer.on_pointer_event(&PointerEvent::up(Point::new(x, to_y)))
}

fn settle(runtime: &StdRuntime, drawer: &DrawerController) -> Result<usize> {
    let mut frames = 0;
    while runtime.needs_frame() {
        if frames == MAX_SETTLE_FRAMES {
            bail!("drawer did not settle within {MAX_SETTLE_FRAMES} frames");
        }
        thread::sleep(FRAME_INTERVAL);
        let time = runtime.pump_frame();
        log::debug!("frame at {}ms: y={:.2}", time / 1_000_000, drawer.position().y);
        frames += 1;
    }
    if !drawer.is_at_rest() {
        bail!("frame queue drained while the drawer is still moving");
    }
    Ok(frames)
}
