use crate::camera;
use crate::overlay;
use crate::render;
use abacus_core::scene::{bead_primitive, frame_primitives, Primitive};
use abacus_core::value::format_readout;
use abacus_core::{Abacus, Interaction};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub abacus: Rc<RefCell<Abacus>>,
    pub interaction: Rc<RefCell<Interaction>>,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub camera_distance: f32,
    pub gpu: Option<render::GpuState<'a>>,
    /// Frame, posts, divider and rods; fixed for the lifetime of the page.
    pub frame_prims: Vec<Primitive>,
    /// One record per bead, addressed by the bead's `NodeRef` slot.
    pub bead_prims: Vec<Primitive>,
    pub last_readout: Option<String>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let abacus = self.abacus.borrow();
        let (hover, model) = {
            let ix = self.interaction.borrow();
            (ix.hover(), ix.rotation().model_matrix())
        };

        // Values are never stored; derive them from the current offsets.
        let readout = format_readout(&abacus.digits());
        if self.last_readout.as_deref() != Some(readout.as_str()) {
            overlay::set_digits(&self.document, &readout);
            self.last_readout = Some(readout);
        }

        let Some(gpu) = &mut self.gpu else {
            return;
        };
        for (id, bead) in abacus.iter() {
            if let Some(slot) = bead.node().and_then(|n| self.bead_prims.get_mut(n.0 as usize)) {
                *slot = bead_primitive(&abacus, id, hover == Some(id));
            }
        }
        let mut prims = Vec::with_capacity(self.frame_prims.len() + self.bead_prims.len());
        prims.extend_from_slice(&self.frame_prims);
        prims.extend_from_slice(&self.bead_prims);

        let cam = camera::canvas_camera(&self.canvas, self.camera_distance);
        gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
        match gpu.render(cam.view_proj(), model, &prims) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[gpu] surface lost; reconfiguring");
                gpu.reconfigure();
            }
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Build the context for `abacus` and tag each bead with its instance slot.
pub fn frame_context(
    abacus: Rc<RefCell<Abacus>>,
    interaction: Rc<RefCell<Interaction>>,
    canvas: web::HtmlCanvasElement,
    document: web::Document,
    camera_distance: f32,
    gpu: Option<render::GpuState<'static>>,
) -> FrameContext<'static> {
    let (frame_prims, bead_prims) = {
        let mut a = abacus.borrow_mut();
        let ids: Vec<_> = a.iter().map(|(id, _)| id).collect();
        let mut bead_prims = Vec::with_capacity(ids.len());
        for id in ids {
            a.set_node(id, abacus_core::NodeRef(bead_prims.len() as u32));
            bead_prims.push(bead_primitive(&a, id, false));
        }
        (frame_primitives(a.layout()), bead_prims)
    };
    FrameContext {
        abacus,
        interaction,
        canvas,
        document,
        camera_distance,
        gpu,
        frame_prims,
        bead_prims,
        last_readout: None,
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
