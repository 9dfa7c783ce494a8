#![cfg(target_arch = "wasm32")]
use crate::constants::PARTICLE_SEED;
use crate::core::constants::TRAIL_LENGTH;
use crate::core::{ChaseChain, ParticleField};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("dragon-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Refuses to start the loop if the required elements are absent.
    let stage = render::Stage::build(&document)?;

    // The pointer target defaults to the viewport center until the first
    // pointermove arrives; the dragon starts there too.
    let center = dom::viewport_center(&window);
    let pointer = Rc::new(RefCell::new(input::PointerState {
        x: center.x,
        y: center.y,
    }));
    let pending_bursts = Rc::new(RefCell::new(0u32));

    events::wire_input_handlers(events::InputWiring {
        pointer: pointer.clone(),
        pending_bursts: pending_bursts.clone(),
        head: stage.head_element().clone(),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        chain: ChaseChain::new(center, TRAIL_LENGTH),
        particles: ParticleField::new(PARTICLE_SEED),
        pointer,
        pending_bursts,
        stage,
    }));
    frame::start_loop(frame_ctx);

    log::info!("render loop started ({TRAIL_LENGTH} trail segments)");
    Ok(())
}
