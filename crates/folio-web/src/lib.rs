//! Browser exports for the folio gallery and parallax scene.
//!
//! JS calls `folio_init` once, forwards DOM events through the input
//! functions, calls `folio_tick` from `requestAnimationFrame`, then reads the
//! flat buffer described in `folio_engine::bridge::protocol`.

pub mod runner;

pub use runner::FolioRunner;

use std::cell::RefCell;

use folio_engine::{Bounds, InputEvent, ItemId};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<FolioRunner>> = RefCell::new(None);
}

fn with_runner<R>(fallback: R, f: impl FnOnce(&mut FolioRunner) -> R) -> R {
    RUNNER.with(|cell| match cell.borrow_mut().as_mut() {
        Some(runner) => f(runner),
        None => {
            log::warn!("folio not initialized. Call folio_init() first.");
            fallback
        }
    })
}

fn push(event: InputEvent) {
    with_runner((), |r| r.push_input(event));
}

/// Parse the gallery items (and optional config) and create the runner.
/// Returns false and logs the reason if either JSON document is invalid.
#[wasm_bindgen]
pub fn folio_init(items_json: &str, config_json: &str) -> bool {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    match FolioRunner::from_json(items_json, config_json) {
        Ok(runner) => {
            let count = runner.runtime().navigator().items().len();
            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });
            log::info!("folio: initialized with {} items", count);
            true
        }
        Err(err) => {
            log::error!("folio: init failed: {}", err);
            false
        }
    }
}

/// Load the certificate deck. Returns false and logs the reason on bad JSON,
/// leaving the previous deck in place.
#[wasm_bindgen]
pub fn folio_load_certificates(certificates_json: &str) -> bool {
    with_runner(false, |r| match r.load_certificates(certificates_json) {
        Ok(()) => {
            log::info!("folio: loaded {} certificates", r.runtime().cards().len());
            true
        }
        Err(err) => {
            log::error!("folio: certificates rejected: {}", err);
            false
        }
    })
}

#[wasm_bindgen]
pub fn folio_tick(dt: f32) {
    with_runner((), |r| r.tick(dt));
}

// ---- Input ----

#[wasm_bindgen]
pub fn folio_viewport_resize(width: f32) {
    push(InputEvent::Resize { width });
}

#[wasm_bindgen]
pub fn folio_scene_pointer_move(x: f32, y: f32, left: f32, top: f32, width: f32, height: f32) {
    push(InputEvent::ScenePointerMove {
        x,
        y,
        bounds: Bounds::new(left, top, width, height),
    });
}

#[wasm_bindgen]
pub fn folio_scene_pointer_leave() {
    push(InputEvent::ScenePointerLeave);
}

#[wasm_bindgen]
pub fn folio_gesture_start() {
    push(InputEvent::GestureStart);
}

#[wasm_bindgen]
pub fn folio_gesture_move(dx: f32) {
    push(InputEvent::GestureMove { dx });
}

#[wasm_bindgen]
pub fn folio_gesture_end(dx: f32) {
    push(InputEvent::GestureEnd { dx });
}

#[wasm_bindgen]
pub fn folio_gesture_cancel() {
    push(InputEvent::GestureCancel);
}

#[wasm_bindgen]
pub fn folio_select(id: u32) {
    push(InputEvent::Select { id: ItemId(id) });
}

#[wasm_bindgen]
pub fn folio_next() {
    push(InputEvent::Next);
}

#[wasm_bindgen]
pub fn folio_previous() {
    push(InputEvent::Previous);
}

#[wasm_bindgen]
pub fn folio_close() {
    push(InputEvent::Close);
}

#[wasm_bindgen]
pub fn folio_backdrop_click() {
    push(InputEvent::BackdropClick);
}

#[wasm_bindgen]
pub fn folio_expand() {
    push(InputEvent::ExpandVisible);
}

#[wasm_bindgen]
pub fn folio_key_down(key_code: u32) {
    push(InputEvent::KeyDown { key_code });
}

#[wasm_bindgen]
pub fn folio_card_enter(index: u32) {
    push(InputEvent::CardEnter { index: index as usize });
}

#[wasm_bindgen]
pub fn folio_card_leave(index: u32) {
    push(InputEvent::CardLeave { index: index as usize });
}

#[wasm_bindgen]
pub fn folio_card_click(index: u32) {
    push(InputEvent::CardClick { index: index as usize });
}

#[wasm_bindgen]
pub fn folio_certificate_preview(id: u32) {
    push(InputEvent::CertificatePreview { id: ItemId(id) });
}

#[wasm_bindgen]
pub fn folio_certificate_close() {
    push(InputEvent::CertificateClose);
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn folio_buffer_ptr() -> *const f32 {
    with_runner(std::ptr::null(), |r| r.buffer_ptr())
}

#[wasm_bindgen]
pub fn folio_buffer_len() -> u32 {
    with_runner(0, |r| r.buffer_len())
}

/// Copy of the current buffer, for hosts that do not read wasm memory directly.
#[wasm_bindgen]
pub fn folio_frame() -> js_sys::Float32Array {
    with_runner(None, |r| Some(js_sys::Float32Array::from(r.buffer())))
        .unwrap_or_else(|| js_sys::Float32Array::new_with_length(0))
}

#[wasm_bindgen]
pub fn folio_card_data_offset() -> u32 {
    with_runner(0, |r| r.card_data_offset())
}

#[wasm_bindgen]
pub fn folio_event_data_offset() -> u32 {
    with_runner(0, |r| r.event_data_offset())
}

#[wasm_bindgen]
pub fn folio_max_events() -> u32 {
    with_runner(0, |r| r.max_events())
}

#[wasm_bindgen]
pub fn folio_scene_transform_css() -> String {
    with_runner(String::new(), |r| r.scene_transform_css())
}

#[wasm_bindgen]
pub fn folio_selected_title() -> Option<String> {
    with_runner(None, |r| r.selected_title())
}

#[wasm_bindgen]
pub fn folio_selected_category() -> Option<String> {
    with_runner(None, |r| r.selected_category())
}

#[wasm_bindgen]
pub fn folio_selected_image() -> Option<String> {
    with_runner(None, |r| r.selected_image())
}

#[wasm_bindgen]
pub fn folio_certificate_title() -> Option<String> {
    with_runner(None, |r| r.certificate_title())
}

#[wasm_bindgen]
pub fn folio_certificate_issuer() -> Option<String> {
    with_runner(None, |r| r.certificate_issuer())
}

#[wasm_bindgen]
pub fn folio_certificate_image() -> Option<String> {
    with_runner(None, |r| r.certificate_image())
}
