//! Bubble Pop entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::MouseEvent;

    use bubble_pop::consts::BACKGROUND_COLOR;
    use bubble_pop::platform::{CanvasSurface, to_surface_coords};
    use bubble_pop::sim::World;
    use bubble_pop::{AppError, Settings};

    const CANVAS_ID: &str = "canvas";

    /// App instance holding the world and its surface
    struct App {
        world: World,
        surface: CanvasSurface,
    }

    pub fn run() -> Result<(), AppError> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| AppError::Js(e.to_string()))?;
        log::info!("Bubble Pop starting...");

        let surface = CanvasSurface::from_element_id(CANVAS_ID)?;
        surface.set_background(BACKGROUND_COLOR)?;
        let bounds = surface.bounds();

        // Optional overrides: <canvas data-settings='{"body_count": 10}'>
        let settings = match surface.canvas().get_attribute("data-settings") {
            Some(json) => Settings::from_json(&json)?,
            None => Settings::default(),
        };

        let seed = js_sys::Date::now() as u64;
        let world = World::new(&settings, bounds, seed)?;

        let app = Rc::new(RefCell::new(App { world, surface }));
        setup_click_handler(app.clone())?;
        request_animation_frame(app);

        log::info!("Bubble Pop running!");
        Ok(())
    }

    fn setup_click_handler(app: Rc<RefCell<App>>) -> Result<(), AppError> {
        let canvas = app.borrow().surface.canvas().clone();
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = canvas_clone.get_bounding_client_rect();
            let point = to_surface_coords(
                Vec2::new(event.client_x() as f32, event.client_y() as f32),
                Vec2::new(rect.left() as f32, rect.top() as f32),
            );
            app.borrow_mut().world.handle_click(point);
        });
        canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window; frame loop stopped");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            frame(app);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
            return;
        }
        closure.forget();
    }

    fn frame(app: Rc<RefCell<App>>) {
        {
            let mut guard = app.borrow_mut();
            let App { world, surface } = &mut *guard;
            world.tick(surface);
        }
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_app::run().map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), bubble_pop::AppError> {
    use bubble_pop::Settings;
    use bubble_pop::renderer::RecordingSurface;
    use bubble_pop::sim::{Bounds, World};

    /// Headless run length cap
    const MAX_TICKS: u64 = 10_000;
    /// Pop one on-screen bubble every this many ticks
    const CLICK_INTERVAL: u64 = 90;

    env_logger::init();
    log::info!("Bubble Pop (native) starting...");
    log::info!("Native mode runs headless - build for wasm32 to see the canvas");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let bounds = Bounds::new(800.0, 600.0);
    let mut world = World::new(&Settings::default(), bounds, seed)?;
    let mut surface = RecordingSurface::new();
    let mut clicks = 0;

    while !world.is_cleared() && world.ticks() < MAX_TICKS {
        surface.reset();
        world.tick(&mut surface);

        if world.ticks() % CLICK_INTERVAL == 0 {
            let target = world
                .bodies()
                .iter()
                .find(|b| b.visible && b.pos.y < bounds.height)
                .map(|b| b.pos);
            if let Some(point) = target {
                world.handle_click(point);
                clicks += 1;
            }
        }
    }

    log::info!(
        "Finished after {} ticks: {} clicked, {} still visible",
        world.ticks(),
        clicks,
        world.visible_count()
    );
    Ok(())
}
