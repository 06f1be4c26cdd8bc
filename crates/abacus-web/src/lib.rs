#![cfg(target_arch = "wasm32")]
mod audio;
mod camera;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

use abacus_core::{Abacus, AbacusConfig, Interaction};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("abacus-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Read the page configuration; a bad query string falls back to defaults.
fn load_config() -> AbacusConfig {
    let search = dom::location_search();
    match AbacusConfig::from_query(&search) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("ignoring query {:?}: {}", search, e);
            AbacusConfig::default()
        }
    }
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::find_canvas(&document, constants::CANVAS_ID)?;
    dom::wire_canvas_resize(&canvas);

    let cfg = load_config();
    log::info!(
        "[config] layout={} sound={} camera_distance={:.1}",
        cfg.layout,
        cfg.sound,
        cfg.camera_distance
    );

    let abacus = Rc::new(RefCell::new(Abacus::new(cfg.layout)));
    let interaction = Rc::new(RefCell::new(Interaction::new(cfg.click_interval_sec)));
    let clicks = match audio::ClickBus::new(cfg.sound) {
        Ok(bus) => Some(bus),
        Err(e) => {
            log::warn!("audio unavailable: {:?}", e);
            None
        }
    };

    let wiring = events::InputWiring {
        canvas: canvas.clone(),
        document: document.clone(),
        abacus: abacus.clone(),
        interaction: interaction.clone(),
        clicks: Rc::new(RefCell::new(clicks)),
        camera_distance: cfg.camera_distance,
        epoch: Instant::now(),
    };
    events::wire_input_handlers(&wiring);
    events::wire_global_keydown(&wiring);

    let gpu = frame::init_gpu(&canvas).await;
    let ctx = frame::frame_context(
        abacus,
        interaction,
        canvas,
        document,
        cfg.camera_distance,
        gpu,
    );
    frame::start_loop(Rc::new(RefCell::new(ctx)));
    Ok(())
}
