// Browser-only: exercises the managed-listener teardown the AI modal relies on
// for its Escape handler. Run with `wasm-pack test --headless --chrome frontend`.
#![cfg(target_arch = "wasm32")]

use gloo_events::EventListener;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_test::*;
use web_sys::KeyboardEvent;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn escape_listener_stops_firing_once_dropped() {
    let document = web_sys::window().unwrap().document().unwrap();
    let hits = Rc::new(Cell::new(0));

    let listener = EventListener::new(&document, "keydown", {
        let hits = hits.clone();
        move |_| hits.set(hits.get() + 1)
    });

    let event = KeyboardEvent::new("keydown").unwrap();
    document.dispatch_event(&event).unwrap();
    assert_eq!(hits.get(), 1);

    // Dropping the listener is what the modal's effect cleanup does on close.
    drop(listener);

    let event = KeyboardEvent::new("keydown").unwrap();
    document.dispatch_event(&event).unwrap();
    assert_eq!(hits.get(), 1);
}
