use crate::core::{ChaseChain, ParticleField};
use crate::input;
use crate::render;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the per-frame tick touches. Input closures write into the
/// shared cells; all engine mutation happens here, on the frame callback.
pub struct FrameContext {
    pub chain: ChaseChain,
    pub particles: ParticleField,
    pub pointer: Rc<RefCell<input::PointerState>>,
    pub pending_bursts: Rc<RefCell<u32>>,
    pub stage: render::Stage,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let target = self.pointer.borrow().pos();
        self.chain.advance(target);

        // Clicks queued since the last frame burst at the head's position.
        let bursts = std::mem::take(&mut *self.pending_bursts.borrow_mut());
        for _ in 0..bursts {
            self.particles.spawn_burst(self.chain.head);
        }
        self.particles.step();

        self.stage.present(&self.chain, target, &self.particles);
    }
}

/// Drive `FrameContext::frame` from requestAnimationFrame, indefinitely.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
