use crate::menu::ScrollAffordance;
use crate::motion::Bounds;
use crate::navigation::ScrollHost;
use crate::reveal::REVEAL_ROOT_MARGIN;
use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{
    window, Document, Element, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollToOptions,
};

fn document() -> Option<Document> {
    window()?.document()
}

pub fn element_bounds(element: &Element) -> Bounds {
    let rect = element.get_bounding_client_rect();
    Bounds {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

/// Resolves section ids against the live document on every call.
pub struct DocumentScroll {
    smooth: bool,
}

impl DocumentScroll {
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            smooth: !reduced_motion,
        }
    }
}

impl ScrollHost for DocumentScroll {
    fn document_top(&self, target_id: &str) -> Option<f64> {
        let document = document()?;
        let element = document.get_element_by_id(target_id)?;
        let body = document.body()?;
        Some(element.get_bounding_client_rect().top() - body.get_bounding_client_rect().top())
    }

    fn scroll_to(&self, top: f64) {
        let Some(win) = window() else {
            return;
        };

        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(if self.smooth {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Auto
        });
        win.scroll_to_with_scroll_to_options(&options);
    }
}

/// The document body's `overflow` style.
#[derive(Clone, Copy, Default)]
pub struct BodyScroll;

impl ScrollAffordance for BodyScroll {
    fn set_scroll_enabled(&self, enabled: bool) {
        let Some(body) = document().and_then(|d| d.body()) else {
            return;
        };

        let style = body.style();
        if enabled {
            let _ = style.remove_property("overflow");
        } else {
            let _ = style.set_property("overflow", "hidden");
        }
    }
}

/// Watches one element's viewport intersection until dropped.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    /// `on_change` receives each notification's intersecting flag and
    /// returns true once it wants no further notifications.
    pub fn observe(
        target: &Element,
        mut on_change: impl FnMut(bool) -> bool + 'static,
    ) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let intersecting = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .any(|entry| entry.is_intersecting());

                if on_change(intersecting) {
                    observer.disconnect();
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_root_margin(REVEAL_ROOT_MARGIN);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok()?;
        observer.observe(target);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
