//! Flappy Gate entry point
//!
//! Browser: Canvas 2D host driven by requestAnimationFrame.
//! Native: headless run with the autopilot and synthetic 60 Hz timestamps.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use flappy_gate::renderer::{CanvasTarget, render};
    use flappy_gate::settings::KeyAction;
    use flappy_gate::{Game, Settings, Tuning};

    /// Everything the frame callback and key handler share
    struct App {
        game: Game,
        target: CanvasTarget,
        settings: Settings,
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Flappy Gate starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let tuning = Tuning::default();
        canvas.set_width(tuning.board_width as u32);
        canvas.set_height(tuning.board_height as u32);

        let settings = Settings::load();
        // Persist so the bindings can be edited in LocalStorage
        settings.save();

        // Missing sprites abort startup
        let target = match CanvasTarget::new(&canvas, &settings.asset_root).await {
            Ok(target) => target,
            Err(e) => {
                log::error!("Failed to load sprites: {:?}", e);
                return;
            }
        };

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let seed = js_sys::Date::now() as u64;
        let mut game = Game::new(tuning, seed);
        game.autopilot = settings.start_in_demo;
        log::info!("Game initialized with seed: {}", seed);

        let app = Rc::new(RefCell::new(App {
            game,
            target,
            settings,
        }));

        setup_input_handlers(app.clone());
        request_animation_frame(app);

        log::info!("Flappy Gate running!");
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let mut app = app.borrow_mut();
            match app.settings.action_for_key(&event.key()) {
                Some(KeyAction::Jump) => {
                    // Space would otherwise scroll the page
                    event.prevent_default();
                    if !event.repeat() {
                        app.game.jump();
                    }
                }
                Some(KeyAction::ToggleAutopilot) => {
                    app.game.autopilot = !app.game.autopilot;
                    log::info!("Autopilot: {}", app.game.autopilot);
                }
                None => {}
            }
        });
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut guard = app.borrow_mut();
            let app = &mut *guard;

            // requestAnimationFrame reports milliseconds
            let now_ns = (time * 1_000_000.0) as u64;
            let request = app.game.frame(now_ns);
            if let Err(e) = render(&request, &mut app.target) {
                log::warn!("Render error: {:?}", e);
            }
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use flappy_gate::Tuning;

    env_logger::init();
    log::info!("Flappy Gate (native) starting...");

    // Usage: flappy-gate [tuning.json] [seconds]
    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => match Tuning::load(&path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(e) => {
                log::error!("{}", e);
                return std::process::ExitCode::FAILURE;
            }
        },
        None => Tuning::default(),
    };
    let seconds = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(secs)) => secs,
        Some(Err(e)) => {
            log::error!("Invalid run length: {}", e);
            return std::process::ExitCode::FAILURE;
        }
        None => 60,
    };
    let Some(end_ns) = run_end_ns(seconds) else {
        log::error!("Run length too long: {} s", seconds);
        return std::process::ExitCode::FAILURE;
    };

    run_headless(tuning, seconds, end_ns);
    std::process::ExitCode::SUCCESS
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Synthetic clock of the first headless frame
#[cfg(not(target_arch = "wasm32"))]
const START_NS: u64 = 1_000_000_000;

/// Clock value at which a headless run of `seconds` stops, or `None` when
/// it does not fit in the nanosecond clock
#[cfg(not(target_arch = "wasm32"))]
fn run_end_ns(seconds: u64) -> Option<u64> {
    seconds.checked_mul(1_000_000_000)?.checked_add(START_NS)
}

/// Fly the autopilot until the clock reaches `end_ns`, restarting after
/// each crash, then print the last frame as JSON
#[cfg(not(target_arch = "wasm32"))]
fn run_headless(tuning: flappy_gate::Tuning, seconds: u64, end_ns: u64) {
    use flappy_gate::Game;
    use flappy_gate::renderer::{RecordingTarget, render};
    use flappy_gate::sim::GameEvent;

    const FRAME_NS: u64 = 16_666_667;

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Headless run: {} s, seed {}", seconds, seed);

    let mut game = Game::new(tuning, seed);
    game.autopilot = true;

    let mut now = START_NS;
    let mut runs: Vec<u32> = Vec::new();
    let mut request = game.frame(now);

    while now < end_ns {
        now = now.saturating_add(FRAME_NS);
        request = game.frame(now);

        if game
            .last_events()
            .iter()
            .any(|e| matches!(e, GameEvent::Crashed { .. }))
        {
            runs.push(request.score);
            game.jump();
        }
    }

    let mut target = RecordingTarget::default();
    let Ok(()) = render(&request, &mut target);
    log::debug!("Final frame: {} draw calls", target.commands.len());

    println!(
        "Runs finished: {}, best score: {}, current score: {}",
        runs.len(),
        runs.iter().copied().max().unwrap_or(0),
        request.score
    );
    match serde_json::to_string_pretty(&request) {
        Ok(json) => println!("{}", json),
        Err(e) => log::warn!("Could not serialize final frame: {}", e),
    }
}
