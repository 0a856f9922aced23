#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

// Target-independent core: wave math, theme selection and page content.
// Host tests exercise these without a browser.

pub mod content;
pub mod theme;
pub mod wave;

// Browser-only half: DOM construction and the canvas render loop.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;

    pub mod page;
    pub mod render;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let app = page::App::mount(&document)?;
        web_sys::console::log_1(&JsValue::from_str("folio: page mounted"));
        // The page lives for the whole tab; its listeners stay registered.
        // Tests mount and unmount their own instance instead.
        std::mem::forget(app);
        Ok(())
    }
}

// When compiling for non-wasm targets (e.g., `cargo test` on host),
// provide an empty stub so the crate still builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
