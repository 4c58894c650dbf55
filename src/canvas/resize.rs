use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use moodmap_core::types::Dimensions;
use web_sys::{Element, ResizeObserver, ResizeObserverEntry};

type ResizeHandler = Closure<dyn FnMut(js_sys::Array, ResizeObserver)>;

/// Watches an element and reports its client size (content plus padding) in
/// whole pixels, the same box [`client_size`] measures.
///
/// Observation stops when the watcher is dropped.
pub struct ResizeWatcher {
    observer: ResizeObserver,
    _handler: ResizeHandler,
}

impl ResizeWatcher {
    pub fn observe(
        target: &Element,
        mut on_resize: impl FnMut(Dimensions) + 'static,
    ) -> Result<Self, JsValue> {
        let handler = ResizeHandler::new(move |entries: js_sys::Array, _: ResizeObserver| {
            // Only the latest size matters.
            let Some(entry) = entries.iter().last() else { return };
            let Ok(entry) = entry.dyn_into::<ResizeObserverEntry>() else { return };
            on_resize(client_size(&entry.target()));
        });
        let observer = ResizeObserver::new(handler.as_ref().unchecked_ref())?;
        observer.observe(target);
        log::debug!("resize observer attached");
        Ok(Self { observer, _handler: handler })
    }
}

/// Current client size of `el`.
pub fn client_size(el: &Element) -> Dimensions {
    Dimensions::from_client(el.client_width(), el.client_height())
}

impl Drop for ResizeWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
        log::debug!("resize observer detached");
    }
}
