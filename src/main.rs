//! Court Ball entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use court_ball::platform::input::{key_down, key_up};
    use court_ball::renderer::CanvasRenderer;
    use court_ball::sim::EditSender;
    use court_ball::{FrameEngine, GameLoop, HostPhase, Settings};

    /// Show the end-of-game message and reload the page
    fn game_over() {
        let Some(window) = web_sys::window() else {
            return;
        };
        let _ = window.alert_with_message("GAME OVER");
        if let Err(e) = window.location().reload() {
            log::error!("Reload failed: {:?}", e);
        }
    }

    fn setup_input_handlers(document: &web_sys::Document, sender: EditSender) {
        {
            let sender = sender.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                key_down(&sender, &event.key());
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                key_up(&sender, &event.key());
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Court Ball starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let settings = Settings::load();
        let court = settings
            .court(canvas.width() as f32, canvas.height() as f32)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let engine = FrameEngine::new(court);
        setup_input_handlers(&document, engine.sender());

        let renderer = CanvasRenderer::new(&canvas)?;
        let game = Rc::new(RefCell::new(GameLoop::new(engine, renderer, game_over)));

        let interval_id = Rc::new(Cell::new(None::<i32>));
        let tick = {
            let window = window.clone();
            let interval_id = Rc::clone(&interval_id);
            Closure::<dyn FnMut()>::new(move || {
                if game.borrow_mut().frame() == HostPhase::Over {
                    if let Some(id) = interval_id.take() {
                        window.clear_interval_with_handle(id);
                        log::info!("Timer stopped: game over");
                    }
                }
            })
        };

        let period = i32::try_from(settings.tick_period_ms)
            .map_err(|_| JsValue::from_str("tick period does not fit a browser interval"))?;
        let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            period,
        )?;
        interval_id.set(Some(id));
        tick.forget();

        log::info!("Game started ({} ms per tick)", settings.tick_period_ms);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use std::sync::mpsc;
    use std::time::Duration;

    use court_ball::consts::{NATIVE_COURT_HEIGHT, NATIVE_COURT_WIDTH};
    use court_ball::game_loop;
    use court_ball::renderer::FrameLog;
    use court_ball::{FrameEngine, GameLoop, Settings};

    /// Headless runs give up after this long
    const MAX_RUN: Duration = Duration::from_secs(60);

    env_logger::init();
    log::info!("Court Ball (native, headless) starting...");

    let settings = Settings::load();
    let court = settings.court(NATIVE_COURT_WIDTH, NATIVE_COURT_HEIGHT)?;

    let (over_tx, over_rx) = mpsc::channel();
    let game = GameLoop::new(FrameEngine::new(court), FrameLog::new(), move || {
        let _ = over_tx.send(());
    });
    let handle = game_loop::start(game, settings.tick_period())?;

    match over_rx.recv_timeout(MAX_RUN) {
        Ok(()) => println!("GAME OVER"),
        Err(_) => {
            log::info!("No miss within {:?}; stopping", MAX_RUN);
            handle.stop();
        }
    }

    let Ok(game) = handle.join() else {
        log::error!("Timer thread panicked");
        return Ok(());
    };

    let state = game.state();
    println!(
        "{} frames, ball at ({:.1}, {:.1}), paddle at {:.1}",
        game.renderer().frames(),
        state.ball_pos.x,
        state.ball_pos.y,
        state.paddle_x
    );
    Ok(())
}
