//! Pong Duel entry point
//!
//! Wires the simulation to the browser: canvas, pointer input, buttons,
//! HUD, and the requestAnimationFrame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

    use pong_duel::Settings;
    use pong_duel::audio::{AudioManager, SoundEffect};
    use pong_duel::consts::*;
    use pong_duel::renderer::CanvasRenderer;
    use pong_duel::sim::{Difficulty, MatchEvent, MatchState, Side, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: MatchState,
        renderer: CanvasRenderer,
        audio: AudioManager,
        settings: Settings,
        input: TickInput,
    }

    impl Game {
        fn new(seed: u64, settings: Settings, renderer: CanvasRenderer) -> Self {
            let mut audio = AudioManager::new();
            audio.set_master_volume(settings.master_volume);
            audio.set_sfx_volume(settings.sfx_volume);
            audio.set_muted(settings.muted);

            Self {
                state: MatchState::new(seed, settings.difficulty),
                renderer,
                audio,
                settings,
                input: TickInput::default(),
            }
        }

        /// Run one frame of simulation and forward side effects
        fn update(&mut self) {
            tick(&mut self.state, &self.input);

            for event in self.state.take_events() {
                match event {
                    MatchEvent::WallBounce => self.audio.play(SoundEffect::WallHit),
                    MatchEvent::PaddleBounce { .. } => self.audio.play(SoundEffect::PaddleHit),
                    MatchEvent::PointScored { side } => {
                        let who = match side {
                            Side::Player => "player",
                            Side::Ai => "ai",
                        };
                        log::debug!(
                            "point for {} ({}-{})",
                            who,
                            self.state.player_score,
                            self.state.ai_score
                        );
                    }
                    MatchEvent::MatchOver(outcome) => {
                        log::info!("{}", outcome.message());
                    }
                }
            }
        }

        fn render(&self) {
            if let Err(e) = self.renderer.render(&self.state) {
                log::warn!("Render error: {:?}", e);
            }
        }

        /// Update score labels and the result panel in the DOM
        fn update_hud(&self) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            if let Some(el) = document.get_element_by_id("playerScore") {
                el.set_text_content(Some(&self.state.player_score.to_string()));
            }
            if let Some(el) = document.get_element_by_id("aiScore") {
                el.set_text_content(Some(&self.state.ai_score.to_string()));
            }

            // Result panel follows the match outcome
            if let Some(panel) = document.get_element_by_id("gameOver") {
                match self.state.outcome {
                    Some(outcome) => {
                        if let Some(el) = document.get_element_by_id("gameResult") {
                            el.set_text_content(Some(outcome.message()));
                        }
                        let _ = panel.set_attribute("class", "");
                    }
                    None => {
                        let _ = panel.set_attribute("class", "hidden");
                    }
                }
            }
        }

        /// Switch difficulty (restarts the match) and remember the choice
        fn set_difficulty(&mut self, difficulty: Difficulty) {
            self.state.set_difficulty(difficulty);
            self.settings.difficulty = difficulty;
            self.settings.save();
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Pong Duel starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(FIELD_WIDTH as u32);
        canvas.set_height(FIELD_HEIGHT as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("get_context failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(
            seed,
            settings,
            CanvasRenderer::new(ctx),
        )));

        log::info!("Game initialized with seed: {}", seed);

        setup_pointer_input(&canvas, game.clone());
        setup_difficulty_buttons(game.clone());
        setup_restart_button(game.clone());

        request_animation_frame(game);

        log::info!("Pong Duel running!");
    }

    /// Mouse movement drives the player paddle
    fn setup_pointer_input(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = canvas_clone.get_bounding_client_rect();
            let y = event.client_y() as f32 - rect.top() as f32 - PADDLE_HEIGHT / 2.0;
            game.borrow_mut().input.pointer_y = Some(y);
        });
        let _ =
            canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_difficulty_buttons(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        for (id, difficulty) in [
            ("easy", Difficulty::Easy),
            ("medium", Difficulty::Medium),
            ("hard", Difficulty::Hard),
        ] {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("Missing difficulty button: #{}", id);
                continue;
            };
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().set_difficulty(difficulty);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        if let Some(btn) = document.get_element_by_id("restartButton") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().state.reset();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            g.update();
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use pong_duel::sim::{Difficulty, MatchState, TickInput, tick};

    env_logger::init();
    log::info!("Pong Duel (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    // Headless smoke match: AI vs a motionless player
    let mut state = MatchState::new(42, Difficulty::Hard);
    let input = TickInput::default();
    let mut frames: u64 = 0;
    while state.running && frames < 1_000_000 {
        tick(&mut state, &input);
        frames += 1;
    }

    match state.outcome {
        Some(outcome) => println!(
            "Match finished after {} frames: {} ({}-{})",
            frames,
            outcome.message(),
            state.player_score,
            state.ai_score
        ),
        None => println!("Match still running after {} frames", frames),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
