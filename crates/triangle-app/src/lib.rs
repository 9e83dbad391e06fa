//! Browser entry point: draws the triangle into `<canvas id="myCanvas">`.

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;

use triangle_engine::bootstrap::{self, Outcome, Triangle};
use triangle_engine::device::{GpuInit, WgpuHost};
use triangle_engine::logging::{init_logging, LoggingConfig};
use wasm_bindgen::prelude::*;

thread_local! {
    // Device and surface stay alive for the lifetime of the page.
    static TRIANGLE: RefCell<Option<Triangle<WgpuHost>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    init_logging(LoggingConfig::default());

    wasm_bindgen_futures::spawn_local(async {
        let mut host = WgpuHost::new(GpuInit::default());
        match bootstrap::run(&mut host).await {
            Ok(Outcome::Rendered(triangle)) => {
                TRIANGLE.with(|slot| *slot.borrow_mut() = Some(triangle));
            }
            // The abort was already logged.
            Ok(Outcome::Aborted { .. }) => {}
            Err(e) => log::error!("rendering failed: {e:#}"),
        }
    });
}
