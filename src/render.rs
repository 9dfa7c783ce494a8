//! Presentation binding: reads chase-chain and particle state each frame and
//! writes positions, rotation, and opacity to DOM elements. The engine in
//! `core` never touches the DOM; everything display-related funnels through
//! `Stage::present`.

use crate::constants::*;
use crate::core::{self, ChaseChain, Particle, ParticleField};
use crate::dom;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Stage {
    document: web::Document,
    head: web::HtmlElement,
    trail: Vec<web::HtmlElement>,
    /// Live particle dots, ordered by ascending particle id.
    dots: Vec<(u64, web::HtmlElement)>,
}

impl Stage {
    /// Look up the required elements and create the trail segment divs.
    ///
    /// A missing `#dragon` or `#dragon-trail` is a fatal setup precondition:
    /// the render loop must not start against partial state.
    pub fn build(document: &web::Document) -> anyhow::Result<Self> {
        let head = document
            .get_element_by_id("dragon")
            .ok_or_else(|| anyhow::anyhow!("missing #dragon"))?
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let trail_host = document
            .get_element_by_id("dragon-trail")
            .ok_or_else(|| anyhow::anyhow!("missing #dragon-trail"))?;

        // Segments are sized once here; only position and opacity change
        // per frame.
        let mut trail = Vec::with_capacity(core::constants::TRAIL_LENGTH);
        for i in 0..core::constants::TRAIL_LENGTH {
            let seg = dom::create_div(document)?;
            seg.set_class_name("trail-segment");
            let size = core::segment_size(i);
            dom::set_style(&seg, "width", &format!("{size}px"));
            dom::set_style(&seg, "height", &format!("{size}px"));
            trail_host
                .append_child(&seg)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            trail.push(seg);
        }

        Ok(Self {
            document: document.clone(),
            head,
            trail,
            dots: Vec::new(),
        })
    }

    pub fn head_element(&self) -> &web::HtmlElement {
        &self.head
    }

    /// Write the current engine state to the DOM.
    pub fn present(&mut self, chain: &ChaseChain, target: Vec2, particles: &ParticleField) {
        dom::set_top_left(&self.head, chain.head - Vec2::splat(HEAD_CENTER_OFFSET_PX));
        let deg = chain.heading_degrees(target) + HEAD_ROTATION_OFFSET_DEG;
        dom::set_style(&self.head, "transform", &format!("rotate({deg}deg)"));

        for (i, (seg, pos)) in self.trail.iter().zip(chain.nodes()).enumerate() {
            let size = core::segment_size(i);
            dom::set_top_left(seg, *pos - Vec2::splat(size * 0.5));
            dom::set_style(
                seg,
                "opacity",
                &core::segment_opacity(i, chain.len()).to_string(),
            );
        }

        self.sync_particles(particles);
    }

    /// Merge the dot elements against the live particle list. Both sides are
    /// ordered by ascending id, so one pass creates dots for newly spawned
    /// particles and removes dots whose particle expired this tick.
    fn sync_particles(&mut self, particles: &ParticleField) {
        let mut old = std::mem::take(&mut self.dots).into_iter().peekable();
        let mut dots = Vec::with_capacity(particles.particles().len());

        for p in particles.particles() {
            while old.peek().map_or(false, |(id, _)| *id < p.id) {
                if let Some((_, el)) = old.next() {
                    el.remove();
                }
            }
            let el = if old.peek().map_or(false, |(id, _)| *id == p.id) {
                match old.next() {
                    Some((_, el)) => el,
                    None => continue,
                }
            } else {
                match spawn_dot(&self.document, p) {
                    Ok(el) => el,
                    Err(e) => {
                        log::error!("particle dot error: {:?}", e);
                        continue;
                    }
                }
            };
            dom::set_top_left(&el, p.pos);
            dom::set_style(&el, "opacity", &p.opacity().to_string());
            dots.push((p.id, el));
        }

        for (_, el) in old {
            el.remove();
        }
        self.dots = dots;
    }
}

fn spawn_dot(document: &web::Document, p: &Particle) -> anyhow::Result<web::HtmlElement> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no body"))?;
    let el = dom::create_div(document)?;
    dom::set_style(&el, "position", "fixed");
    dom::set_style(&el, "width", &format!("{PARTICLE_SIZE_PX}px"));
    dom::set_style(&el, "height", &format!("{PARTICLE_SIZE_PX}px"));
    dom::set_style(&el, "border-radius", "50%");
    dom::set_style(&el, "background", PARTICLE_COLORS[(p.id % 2) as usize]);
    dom::set_style(&el, "pointer-events", "none");
    dom::set_style(&el, "z-index", PARTICLE_Z_INDEX);
    body.append_child(&el)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(el)
}
