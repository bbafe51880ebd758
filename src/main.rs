//! Pendulum Chain entry point
//!
//! Web: sets up the two canvases, input handlers and the animation loop.
//! Native: runs the simulation headless and prints a JSON summary.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use pendulum_chain::renderer::CanvasSurface;
    use pendulum_chain::{Pendulum, Settings};

    /// Everything the event handlers and the frame loop share
    struct App {
        pendulum: Pendulum,
        primary: CanvasSurface,
        trace: CanvasSurface,
        speed_label: Option<Element>,
    }

    impl App {
        fn frame(&mut self, time: f64) {
            let view = self
                .pendulum
                .frame(time, &mut self.primary, &mut self.trace);

            self.primary.set_cursor(view.cursor);
            if let Some(el) = &self.speed_label {
                el.set_text_content(Some(&view.speed_label));
            }
        }
    }

    fn canvas_by_id(document: &Document, id: &str) -> HtmlCanvasElement {
        document
            .get_element_by_id(id)
            .unwrap_or_else(|| panic!("no #{} element", id))
            .dyn_into()
            .unwrap_or_else(|_| panic!("#{} is not a canvas", id))
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Pendulum starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Sized once at load; the canvases don't follow window resizes
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(600.0);

        let settings = Settings::load();

        let primary_canvas = canvas_by_id(&document, "canvas");
        let trace_canvas = canvas_by_id(&document, "line_canvas");
        for canvas in [&primary_canvas, &trace_canvas] {
            canvas.set_width(width as u32);
            canvas.set_height(height as u32);
        }

        let primary = CanvasSurface::new(
            primary_canvas.clone(),
            &settings.stroke_color,
            &settings.fill_color,
            settings.line_width,
        )
        .expect("pendulum canvas has no 2D context");
        let trace = CanvasSurface::new(
            trace_canvas,
            &settings.trace_color,
            &settings.trace_color,
            settings.line_width,
        )
        .expect("trace canvas has no 2D context");

        let app = Rc::new(RefCell::new(App {
            pendulum: Pendulum::new(width, height, settings),
            primary,
            trace,
            speed_label: document.get_element_by_id("current_speed"),
        }));

        setup_input_handlers(&window, &primary_canvas, app.clone());

        // Start the animation loop
        request_animation_frame(app);

        log::info!("Pendulum running ({}x{})", width, height);
    }

    fn setup_input_handlers(
        window: &web_sys::Window,
        canvas: &HtmlCanvasElement,
        app: Rc<RefCell<App>>,
    ) {
        // Mouse press - place a joint while paused
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if event.button() != 0 {
                    return;
                }
                app.borrow_mut()
                    .pendulum
                    .pointer_down(event.client_x() as f64, event.client_y() as f64);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut guard = app.borrow_mut();
                let App {
                    pendulum,
                    primary,
                    trace,
                    ..
                } = &mut *guard;
                let handled = pendulum.key_down(&event.code(), event.repeat(), primary, trace);
                if handled.is_some() {
                    // Space and the arrows would otherwise scroll the page
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            frame_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>, time: f64) {
        app.borrow_mut().frame(time);
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    web::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use pendulum_chain::Settings;
    use pendulum_chain::headless::{self, RunArgs};

    env_logger::init();
    log::info!("Pendulum (native) starting...");
    log::info!("Native mode runs headless - serve the wasm build for the interactive version");

    let args = match RunArgs::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {}", e);
            eprintln!("usage: pendulum-chain [settings.json] [--seed N] [--points N] [--frames N]");
            std::process::exit(2);
        }
    };

    let settings = Settings::load_from(args.settings.as_deref());
    let summary = headless::run(&args, settings);

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            log::error!("Failed to encode summary: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
