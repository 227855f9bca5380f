//! Bubble Pop entry point
//!
//! Handles platform-specific initialization and drives the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    use bubble_pop::consts::TICK_INTERVAL_MS;
    use bubble_pop::render::{CanvasSurface, Surface};
    use bubble_pop::{Session, Tuning};

    /// Host-side state: the session plus the timer driving it
    struct App {
        session: Session,
        surface: CanvasSurface,
        interval: Option<i32>,
        /// Tuning written back to LocalStorage (once, on the first start)
        tuning_saved: bool,
    }

    impl App {
        fn start(&mut self, tick: &js_sys::Function) {
            let (w, h) = (self.surface.width(), self.surface.height());
            if self.session.start(js_sys::Date::now(), w, h) {
                self.persist_tuning();
                self.schedule(tick);
            }
        }

        fn restart(&mut self, tick: &js_sys::Function) {
            self.cancel();
            let (w, h) = (self.surface.width(), self.surface.height());
            self.session.restart(js_sys::Date::now(), w, h);
            self.persist_tuning();
            self.schedule(tick);
        }

        /// Store the tuning in use so it can be edited in LocalStorage
        fn persist_tuning(&mut self) {
            if !self.tuning_saved {
                self.session.tuning().save();
                self.tuning_saved = true;
            }
        }

        fn stop(&mut self) {
            if self.session.stop() {
                self.cancel();
                Session::clear(&mut self.surface);
            }
        }

        fn frame(&mut self) {
            if let Some(events) = self.session.run(js_sys::Date::now(), &mut self.surface) {
                for event in events {
                    log::debug!("{:?}", event);
                }
            }
        }

        fn schedule(&mut self, tick: &js_sys::Function) {
            let Some(window) = web_sys::window() else {
                return;
            };
            match window.set_interval_with_callback_and_timeout_and_arguments_0(tick, TICK_INTERVAL_MS) {
                Ok(id) => self.interval = Some(id),
                Err(e) => log::error!("Failed to schedule game loop: {:?}", e),
            }
        }

        fn cancel(&mut self) {
            if let (Some(id), Some(window)) = (self.interval.take(), web_sys::window()) {
                window.clear_interval_with_handle(id);
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        log::info!("Bubble Pop starting...");

        let surface = CanvasSurface::from_element_id("canvas")?;
        let app = Rc::new(RefCell::new(App {
            session: Session::new(Tuning::load()),
            surface,
            interval: None,
            tuning_saved: false,
        }));

        // One callback for the lifetime of the page; start/stop only add and
        // remove the interval that calls it
        let tick = {
            let app = app.clone();
            Closure::<dyn FnMut()>::new(move || app.borrow_mut().frame())
        };
        let tick_fn: js_sys::Function = tick.as_ref().unchecked_ref::<js_sys::Function>().clone();
        tick.forget();

        setup_input_handlers(app.clone())?;
        setup_buttons(app, tick_fn);

        log::info!("Bubble Pop ready");
        Ok(())
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                app.borrow_mut().session.key_down(&event.key());
            });
            window.add_event_listener_with_callback_and_bool(
                "keydown",
                closure.as_ref().unchecked_ref(),
                true,
            )?;
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                app.borrow_mut().session.key_up(&event.key());
            });
            window.add_event_listener_with_callback_and_bool(
                "keyup",
                closure.as_ref().unchecked_ref(),
                true,
            )?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_buttons(app: Rc<RefCell<App>>, tick: js_sys::Function) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let bind = |id: &str, mut action: Box<dyn FnMut(&mut App)>| {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("Button #{} not found", id);
                return;
            };
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                action(&mut *app.borrow_mut());
            });
            if let Err(e) =
                btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            {
                log::warn!("Failed to bind #{}: {:?}", id, e);
            }
            closure.forget();
        };

        {
            let tick = tick.clone();
            bind("run-btn", Box::new(move |app: &mut App| app.start(&tick)));
        }
        bind("restart-btn", Box::new(move |app: &mut App| app.restart(&tick)));
        bind("stop-btn", Box::new(|app: &mut App| app.stop()));
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
    if let Err(e) = wasm_game::run() {
        log::error!("Bubble Pop failed to start: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Bubble Pop (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    demo::run(bubble_pop::Tuning::load(), 60.0);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless autoplay: the player walks under the nearest bubble and fires
#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use bubble_pop::consts::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
    use bubble_pop::render::RecordingSurface;
    use bubble_pop::sim::GameEvent;
    use bubble_pop::{Session, Tuning};

    /// Simulated frame length (ms)
    const FRAME_MS: f64 = 16.0;

    pub fn run(tuning: Tuning, seconds: f64) {
        let mut session = Session::new(tuning);
        let mut surface = RecordingSurface::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT);
        session.start(0.0, surface.width, surface.height);

        let (mut pops, mut misses, mut hits) = (0u32, 0u32, 0u32);
        let mut now = 0.0;
        while now < seconds * 1000.0 {
            now += FRAME_MS;
            steer(&mut session);
            surface.reset();
            let Some(events) = session.run(now, &mut surface) else {
                break;
            };
            for event in events {
                match event {
                    GameEvent::BubblePopped { .. } => pops += 1,
                    GameEvent::BulletMissed => misses += 1,
                    GameEvent::PlayerCollision => hits += 1,
                    _ => {}
                }
            }
            if session.game().is_some_and(|g| g.is_cleared()) {
                log::info!("All bubbles popped after {:.1}s", now / 1000.0);
                break;
            }
        }

        let left = session.game().map_or(0, |g| g.bubbles.len());
        log::info!(
            "Demo finished: {} pops, {} misses, {} player contacts, {} bubbles left",
            pops,
            misses,
            hits,
            left
        );
        session.stop();
    }

    /// Press and release keys the way a player would
    fn steer(session: &mut Session) {
        let Some(game) = session.game() else {
            return;
        };
        let muzzle = game.player.muzzle().x;
        let Some(target) = game
            .bubbles
            .iter()
            .map(|b| b.position.x)
            .min_by(|a, b| (a - muzzle).abs().total_cmp(&(b - muzzle).abs()))
        else {
            return;
        };
        let shooting = game.player.is_shooting();

        let gap = target - muzzle;
        if gap.abs() < 4.0 {
            session.key_up("a");
            session.key_up("d");
            if !shooting {
                session.key_down("w");
            }
        } else if gap < 0.0 {
            session.key_up("d");
            session.key_down("a");
        } else {
            session.key_up("a");
            session.key_down("d");
        }
    }
}
