//! Brick Break entry point
//!
//! wasm: wires the canvas, mouse input, and the Start/Pause/Resume/Reset
//! controls to the simulation. native: headless autoplay demo.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, MouseEvent};

    use brick_break::consts::*;
    use brick_break::platform::{self, Interval};
    use brick_break::renderer::{CanvasSurface, draw_frame};
    use brick_break::sim::{GamePhase, GameState, step};

    /// Everything the page shell owns
    struct App {
        state: GameState,
        surface: CanvasSurface,
        ticker: Option<Interval>,
        /// Bumped on every start/reset; tick callbacks from an older
        /// session see a mismatch and do nothing.
        session: u64,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("playfield")
            .expect("no playfield canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(PLAYFIELD_WIDTH as u32);
        canvas.set_height(PLAYFIELD_HEIGHT as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("context lookup failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let seed = js_sys::Date::now() as u64;
        let mut state = GameState::new(seed);

        // A snapshot written on pause survives a reload; Resume picks the
        // session back up where it stopped.
        if let Some(saved) = platform::load_snapshot() {
            if saved.phase == GamePhase::Paused {
                log::info!(
                    "restored paused session (score {}, tick {})",
                    saved.score,
                    saved.time_ticks
                );
                state = saved;
            } else {
                platform::clear_snapshot();
            }
        }

        let restored = state.phase == GamePhase::Paused;
        let app = Rc::new(RefCell::new(App {
            state,
            surface: CanvasSurface::new(ctx),
            ticker: None,
            session: 0,
        }));

        // First paint so the board is visible before Start
        {
            let mut a = app.borrow_mut();
            let App { state, surface, .. } = &mut *a;
            draw_frame(surface, state);
        }
        if restored {
            set_status("Paused");
        }

        setup_mouse_input(&document, &canvas, app.clone());
        setup_controls(&document, app);

        log::info!("brick-break ready (seed {seed})");
    }

    /// Paddle follows the pointer, measured from the canvas's left edge.
    /// Positions outside the playfield are dropped in the sim.
    fn setup_mouse_input(document: &Document, canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let relative_x = event.client_x() as f32 - canvas.offset_left() as f32;
            let mut a = app.borrow_mut();
            a.state.on_paddle_input(relative_x);
            if a.state.phase != GamePhase::Running {
                // No ticker is repainting; show the paddle move anyway
                let App { state, surface, .. } = &mut *a;
                draw_frame(surface, state);
            }
        });
        let _ =
            document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_controls(document: &Document, app: Rc<RefCell<App>>) {
        on_click(document, "start-btn", {
            let app = app.clone();
            move || start(&app)
        });
        on_click(document, "pause-btn", {
            let app = app.clone();
            move || pause(&app)
        });
        on_click(document, "resume-btn", {
            let app = app.clone();
            move || resume(&app)
        });
        on_click(document, "reset-btn", move || reset(&app));
    }

    fn on_click(document: &Document, id: &str, mut handler: impl FnMut() + 'static) {
        let Some(button) = document.get_element_by_id(id) else {
            log::warn!("missing control #{id}");
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| handler());
        let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn start(app: &Rc<RefCell<App>>) {
        if let Err(err) = app.borrow_mut().state.start() {
            log::warn!("{err}");
            return;
        }
        platform::clear_snapshot();
        set_status("Playing");
        spawn_ticker(app);
    }

    fn pause(app: &Rc<RefCell<App>>) {
        let mut a = app.borrow_mut();
        if let Err(err) = a.state.pause() {
            log::warn!("{err}");
            return;
        }
        a.ticker = None;
        platform::save_snapshot(&a.state);
        set_status("Paused");
    }

    fn resume(app: &Rc<RefCell<App>>) {
        if let Err(err) = app.borrow_mut().state.resume() {
            log::warn!("{err}");
            return;
        }
        platform::clear_snapshot();
        set_status("Playing");
        spawn_ticker(app);
    }

    fn reset(app: &Rc<RefCell<App>>) {
        {
            let mut a = app.borrow_mut();
            a.ticker = None;
            a.state.reset();
        }
        platform::clear_snapshot();
        set_status("Playing");
        spawn_ticker(app);
    }

    fn spawn_ticker(app: &Rc<RefCell<App>>) {
        let session = {
            let mut a = app.borrow_mut();
            a.session += 1;
            a.session
        };

        let tick_app = app.clone();
        match Interval::every(TICK_INTERVAL_MS, move || on_tick(&tick_app, session)) {
            Ok(ticker) => app.borrow_mut().ticker = Some(ticker),
            Err(err) => log::error!("failed to start ticker: {err:?}"),
        }
    }

    fn on_tick(app: &Rc<RefCell<App>>, session: u64) {
        let mut a = app.borrow_mut();
        if a.session != session {
            // A newer session owns the board; this callback is stale
            return;
        }

        step(&mut a.state);
        let App {
            state,
            surface,
            ticker,
            ..
        } = &mut *a;
        draw_frame(surface, state);

        if let GamePhase::Over(outcome) = state.phase {
            if let Some(ticker) = ticker.as_mut() {
                ticker.cancel();
            }
            platform::clear_snapshot();
            set_status(outcome.message());
        }
    }

    fn set_status(text: &str) {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("status"))
        else {
            return;
        };
        el.set_text_content(Some(text));
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use brick_break::sim::{GamePhase, GameState, step};

    env_logger::init();

    // Headless autoplay: the paddle shadows the ball, so the session runs
    // until the board is cleared (bounded in case it settles into a loop).
    let mut state = GameState::new(0x5eed);
    if let Err(err) = state.start() {
        log::error!("{err}");
        return;
    }

    let mut ticks = 0u64;
    while state.phase == GamePhase::Running && ticks < 5_000_000 {
        state.on_paddle_input(state.ball.pos.x);
        step(&mut state);
        ticks += 1;
    }

    match state.phase {
        GamePhase::Over(outcome) => println!(
            "{} score {} in {} ticks",
            outcome.message(),
            state.score,
            state.time_ticks
        ),
        _ => println!(
            "demo stopped after {ticks} ticks with {} bricks left (score {})",
            state.bricks_remaining(),
            state.score
        ),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main; this satisfies the bin target
}
