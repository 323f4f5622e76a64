use triangle_core::CanvasSize;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Reuse `#<id>` if the page has one, otherwise append a fresh canvas to
/// `<body>`.
pub fn find_or_create_canvas(
    document: &web::Document,
    id: &str,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let existing = document
        .query_selector(&format!("#{id}"))
        .map_err(|e| anyhow::anyhow!("querySelector error: {:?}", e))?;
    if let Some(el) = existing {
        return el
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("#{id} is not a canvas: {:?}", e)));
    }

    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    canvas.set_id(id);
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no body"))?;
    body.append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    log::info!("[canvas] created #{}", id);
    Ok(canvas)
}

/// Match the backing store to the displayed size times `pixel_ratio`
/// (`devicePixelRatio` when `None`). Returns the resulting size.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    pixel_ratio: Option<f64>,
) -> CanvasSize {
    let ratio = pixel_ratio
        .or_else(|| web::window().map(|w| w.device_pixel_ratio()))
        .unwrap_or(1.0);
    let target = CanvasSize::display_target(
        canvas.client_width() as f64,
        canvas.client_height() as f64,
        ratio,
    );
    let target = CanvasSize::new(target.width.max(1), target.height.max(1));
    if canvas.width() != target.width || canvas.height() != target.height {
        canvas.set_width(target.width);
        canvas.set_height(target.height);
    }
    target
}
