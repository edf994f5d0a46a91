//! Bounce entry point
//!
//! Native builds run the headless backend; wasm32 builds draw into the
//! page's `<canvas id="canvas">`.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;

    use bounce::Runner;
    use bounce::platform::WebBackend;
    use bounce::settings::Settings;
    use bounce::sim::{BouncingBall, scene};

    /// Runner and backend shared with the animation frame callbacks
    struct Game {
        runner: Runner<BouncingBall>,
        backend: WebBackend,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {e}").into());
        }

        log::info!("Bounce starting...");

        let settings = Settings {
            screen_width: 960,
            screen_height: 540,
            ..Settings::default()
        };

        let mut runner = match Runner::new(settings, scene::hooks()) {
            Ok(runner) => runner,
            Err(e) => {
                log::error!("Invalid settings: {e}");
                return;
            }
        };
        let mut backend = WebBackend::new("canvas");
        if let Err(e) = runner.start(&mut backend) {
            log::error!("Failed to start: {e}");
            return;
        }

        let game = Rc::new(RefCell::new(Game { runner, backend }));
        request_animation_frame(game);

        log::info!("Bounce running!");
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window for animation frame");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let keep_running = {
            let mut g = game.borrow_mut();
            let Game { runner, backend } = &mut *g;
            match runner.frame(backend) {
                Ok(running) => running,
                Err(e) => {
                    log::error!("Frame failed: {e}");
                    false
                }
            }
        };

        if keep_running {
            request_animation_frame(game);
        } else {
            let mut g = game.borrow_mut();
            let Game { runner, backend } = &mut *g;
            runner.finish(backend);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use bounce::consts::DEFAULT_HEADLESS_FRAMES;
    use bounce::platform::HeadlessBackend;
    use bounce::sim::scene;
    use bounce::{Runner, Settings};

    env_logger::init();
    log::info!("Bounce (native) starting...");

    // bounce [settings.json] [frames]
    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load(&path)
            .with_context(|| format!("failed to load settings from {path}"))?,
        None => Settings::default(),
    };
    let frames = match args.next() {
        Some(n) => n
            .parse::<u64>()
            .with_context(|| format!("invalid frame count '{n}'"))?,
        None => DEFAULT_HEADLESS_FRAMES,
    };

    let runner = Runner::new(settings, scene::hooks()).context("invalid settings")?;
    let mut backend = HeadlessBackend::new(frames);
    let scene = runner
        .run(&mut backend)
        .context("simulation failed")?
        .context("simulation produced no game context")?;

    let ball = &scene.ball;
    log::info!(
        "Finished {} frames: ball at ({:.1}, {:.1}) heading ({}, {})",
        backend.frames_presented(),
        ball.position().x,
        ball.position().y,
        ball.direction().x,
        ball.direction().y
    );
    println!(
        "{}",
        serde_json::to_string_pretty(ball).context("failed to serialize ball state")?
    );
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
