#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

pub mod animation;
pub mod config;
pub mod error;
pub mod geometry;
pub mod render;
pub mod surface;
pub mod theme;

// Only compile browser bindings when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use std::cell::RefCell;

    use wasm_bindgen::prelude::*;

    use crate::config::HelixConfig;

    pub mod canvas;
    pub mod render;

    pub use canvas::WebCanvas;
    pub use render::{mount, HelixHandle};

    thread_local! {
        static MOUNTED: RefCell<Option<render::HelixHandle>> = const { RefCell::new(None) };
    }

    /// Optional `<script type="application/json" id="helix-config">` block.
    fn page_config() -> HelixConfig {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("helix-config"))
            .and_then(|el| el.text_content());
        match text {
            Some(json) => HelixConfig::from_json(&json).unwrap_or_else(|e| {
                web_sys::console::warn_1(&format!("ignoring helix-config: {}", e).into());
                HelixConfig::default()
            }),
            None => HelixConfig::default(),
        }
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let config = page_config();
        console_log::init_with_level(config.level()).ok();

        // Decoration only: a failed mount is logged, never thrown.
        match render::mount(&config) {
            Ok(handle) => MOUNTED.with(|m| *m.borrow_mut() = handle),
            Err(e) => log::error!("helix mount failed: {}", e),
        }
        Ok(())
    }

    /// Stop the helix mounted at startup, if any.
    #[wasm_bindgen]
    pub fn teardown() {
        MOUNTED.with(|m| {
            if let Some(handle) = m.borrow().as_ref() {
                handle.teardown();
            }
        });
    }

    /// Whether the startup helix is mounted and not yet torn down. A
    /// reduced-motion helix counts as mounted after its single frame.
    #[wasm_bindgen(js_name = isMounted)]
    pub fn is_mounted() -> bool {
        MOUNTED.with(|m| m.borrow().as_ref().is_some_and(|h| h.is_mounted()))
    }
}
