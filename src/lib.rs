#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use triangle_core::{DemoConfig, PointerGate, TriangleApp};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod input;
mod render;

pub type SharedApp = Rc<RefCell<TriangleApp<render::WebGlSurface>>>;

// Keep the backing store and viewport in step with the displayed canvas size
fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, app: &SharedApp) {
    let pixel_ratio = app.borrow().config().pixel_ratio;
    let size = dom::sync_canvas_backing_size(canvas, pixel_ratio);
    app.borrow_mut().sync_size(size);

    let canvas_resize = canvas.clone();
    let app_resize = app.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let size = dom::sync_canvas_backing_size(&canvas_resize, pixel_ratio);
        app_resize.borrow_mut().sync_size(size);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("triangle-web starting");

    if let Err(e) = init(DemoConfig::default()) {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init(config: DemoConfig) -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::find_or_create_canvas(&document, config.canvas_id)?;

    let surface = render::WebGlSurface::new(&canvas)?;
    let app: SharedApp = Rc::new(RefCell::new(TriangleApp::new(surface, config)?));

    wire_canvas_resize(&canvas, &app);

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        app: app.clone(),
        gate: Rc::new(RefCell::new(PointerGate::default())),
    });

    frame::start_loop(app);
    Ok(())
}
