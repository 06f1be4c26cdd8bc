use super::InputWiring;
use crate::dom;
use crate::overlay;
use abacus_core::{key_command, KeyCommand};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, w: &InputWiring) {
    // leave browser shortcuts alone
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let Some(cmd) = key_command(&ev.key()) else {
        return;
    };
    match cmd {
        KeyCommand::Reset => {
            w.abacus.borrow_mut().reset();
            w.interaction.borrow_mut().reset_rotation();
            log::info!("[keys] reset");
        }
        KeyCommand::ToggleHelp => overlay::toggle(&w.document),
        KeyCommand::ToggleSound => {
            if let Some(bus) = w.clicks.borrow_mut().as_mut() {
                let on = bus.toggle();
                log::info!("[keys] sound {}", if on { "on" } else { "off" });
            }
        }
        KeyCommand::SetDigit(digit) => set_hovered_column(w, digit),
        KeyCommand::ToggleFullscreen => {
            dom::toggle_fullscreen(&w.canvas);
            ev.prevent_default();
        }
        KeyCommand::ExitFullscreen => dom::exit_fullscreen(),
    }
}

/// Typing a digit writes it into the column under the pointer.
fn set_hovered_column(w: &InputWiring, digit: u8) {
    let ix = w.interaction.borrow();
    if ix.dragged_bead().is_some() {
        return;
    }
    let Some(bead) = ix.hover() else {
        return;
    };
    let mut abacus = w.abacus.borrow_mut();
    let rod = abacus[bead].key.rod;
    match abacus.set_column_value(rod, digit) {
        Ok(()) => log::info!("[keys] rod {} set to {}", rod, digit),
        Err(e) => log::warn!("[keys] {}", e),
    }
}

pub fn wire_global_keydown(w: &InputWiring) {
    if let Some(window) = web::window() {
        let w = w.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &w);
            }) as Box<dyn FnMut(_)>);
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
