use crate::audio::ClickBus;
use crate::camera;
use crate::constants::{CURSOR_ACTIVE, CURSOR_HOVER, CURSOR_IDLE};
use crate::input;
use abacus_core::{
    Abacus, BeadId, Gesture, Interaction, PointerDown, PointerMove, HOVER_RADIUS_PX,
    PICK_RADIUS_PX,
};
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Shared state the pointer and keyboard listeners close over.
#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub abacus: Rc<RefCell<Abacus>>,
    pub interaction: Rc<RefCell<Interaction>>,
    pub clicks: Rc<RefCell<Option<ClickBus>>>,
    pub camera_distance: f32,
    pub epoch: Instant,
}

impl InputWiring {
    /// Seconds on the click clock: audio time when there is audio.
    fn now_sec(&self) -> f64 {
        match self.clicks.borrow().as_ref() {
            Some(bus) => bus.now(),
            None => self.epoch.elapsed().as_secs_f64(),
        }
    }

    /// Bead within `radius_px` of the pointer under the current rotation.
    fn pick(&self, css_px: Vec2, radius_px: f32) -> Option<BeadId> {
        let cam = camera::canvas_camera(&self.canvas, self.camera_distance);
        let model = self.interaction.borrow().rotation().model_matrix();
        let size = input::canvas_css_size(&self.canvas);
        camera::pick_bead(&self.abacus.borrow(), &cam, model, size, css_px, radius_px)
    }

    fn drag_bead_to_pointer(&self, bead: BeadId, css_px: Vec2) {
        let cam = camera::canvas_camera(&self.canvas, self.camera_distance);
        let model = self.interaction.borrow().rotation().model_matrix();
        let ray = camera::pointer_ray(&cam, input::canvas_css_size(&self.canvas), css_px);
        let candidate = camera::drag_candidate(&self.abacus.borrow(), bead, &cam, model, ray);
        if let Some(t) = candidate {
            self.abacus.borrow_mut().drag_to(bead, t);
        }
    }

    fn refresh_cursor(&self) {
        let ix = self.interaction.borrow();
        let cursor = match ix.gesture() {
            Gesture::Idle if ix.hover().is_some() => CURSOR_HOVER,
            Gesture::Idle => CURSOR_IDLE,
            _ => CURSOR_ACTIVE,
        };
        input::set_cursor(&self.canvas, cursor);
    }

    fn on_pointer_down(&self, ev: &web::PointerEvent) {
        let pos = input::pointer_css_px(ev, &self.canvas);
        let hit = self.pick(pos, PICK_RADIUS_PX);
        if let Some(bus) = self.clicks.borrow().as_ref() {
            bus.resume();
        }
        let now = self.now_sec();
        let outcome = self
            .interaction
            .borrow_mut()
            .pointer_down(ev.pointer_id(), pos, hit, now);
        match outcome {
            PointerDown::BeginDrag { bead, play_click } => {
                log::info!("[pointer] begin drag on {:?}", self.abacus.borrow()[bead].key);
                if play_click {
                    if let Some(bus) = self.clicks.borrow().as_ref() {
                        bus.trigger_click();
                    }
                }
            }
            PointerDown::BeginRotate => log::debug!("[pointer] begin rotate"),
            PointerDown::Ignored => return,
        }
        let _ = self.canvas.set_pointer_capture(ev.pointer_id());
        self.refresh_cursor();
        ev.prevent_default();
    }

    fn on_pointer_move(&self, ev: &web::PointerEvent) {
        let pos = input::pointer_css_px(ev, &self.canvas);
        let step = self
            .interaction
            .borrow_mut()
            .pointer_move(ev.pointer_id(), pos);
        match step {
            PointerMove::Drag { bead } => self.drag_bead_to_pointer(bead, pos),
            PointerMove::Rotated | PointerMove::Ignored => {}
            PointerMove::Idle => {
                let hit = self.pick(pos, HOVER_RADIUS_PX);
                if self.interaction.borrow_mut().set_hover(hit) {
                    self.refresh_cursor();
                }
            }
        }
    }

    fn on_pointer_end(&self, ev: &web::PointerEvent) {
        let ended = self.interaction.borrow_mut().pointer_up(ev.pointer_id());
        if let Some(bead) = ended {
            let mut abacus = self.abacus.borrow_mut();
            let snapped = abacus.release(bead);
            log::info!(
                "[pointer] end drag on {:?} at {:?}",
                abacus[bead].key,
                snapped
            );
        }
        if self.interaction.borrow().gesture() == Gesture::Idle {
            // the assembly or bead may have moved out from under the pointer
            let pos = input::pointer_css_px(ev, &self.canvas);
            let hit = self.pick(pos, HOVER_RADIUS_PX);
            self.interaction.borrow_mut().set_hover(hit);
        }
        self.refresh_cursor();
    }
}

fn listen(
    target: &web::EventTarget,
    event: &str,
    w: &InputWiring,
    handler: fn(&InputWiring, &web::PointerEvent),
) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        handler(&w, &ev);
    }) as Box<dyn FnMut(_)>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_input_handlers(w: &InputWiring) {
    input::disable_touch_actions(&w.canvas);
    input::set_cursor(&w.canvas, CURSOR_IDLE);

    listen(&w.canvas, "pointerdown", w, InputWiring::on_pointer_down);
    // capture loss is reported on the capturing element
    listen(&w.canvas, "lostpointercapture", w, InputWiring::on_pointer_end);
    if let Some(wnd) = web::window() {
        listen(&wnd, "pointermove", w, InputWiring::on_pointer_move);
        listen(&wnd, "pointerup", w, InputWiring::on_pointer_end);
        listen(&wnd, "pointercancel", w, InputWiring::on_pointer_end);
    }
}
