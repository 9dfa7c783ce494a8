use glam::Vec2;
use web_sys as web;

/// Latest pointer position in absolute viewport coordinates.
///
/// Overwritten on every pointermove with no smoothing or buffering; the
/// frame tick only ever cares about the most recent value.
#[derive(Default, Clone, Copy)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

#[inline]
pub fn pointer_client_px(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}
