use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Viewport center: the pointer target before any input arrives.
pub fn viewport_center(window: &web::Window) -> Vec2 {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or_default();
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or_default();
    Vec2::new(w as f32 * 0.5, h as f32 * 0.5)
}

pub fn create_div(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

#[inline]
pub fn set_style(el: &web::HtmlElement, prop: &str, value: &str) {
    _ = el.style().set_property(prop, value);
}

/// Position an absolutely/fixed-positioned element by its top-left corner.
#[inline]
pub fn set_top_left(el: &web::HtmlElement, top_left: Vec2) {
    set_style(el, "left", &format!("{}px", top_left.x));
    set_style(el, "top", &format!("{}px", top_left.y));
}
