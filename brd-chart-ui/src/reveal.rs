//! Scroll reveals and the hero entrance, applied as inline CSS transitions.
//!
//! Cosmetic only: every failure path here logs and leaves the element visible.

use crate::js_bridge::js_error_text;
use brd_dashboard::reveal::{
    hidden_style, shown_style, RevealTracker, HERO_DURATION_MS, HERO_EASING, HERO_SEQUENCE,
    REVEAL_DURATION_MS, REVEAL_EASING, REVEAL_OFFSET_PX, REVEAL_ROOT_MARGIN, REVEAL_SELECTOR,
    REVEAL_THRESHOLD,
};
use js_sys::Array;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

fn apply_style<'a>(element: &Element, declarations: impl IntoIterator<Item = (&'a str, String)>) {
    let Some(html) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = html.style();
    for (property, value) in declarations {
        if let Err(e) = style.set_property(property, &value) {
            log::debug!("Could not set {}: {}", property, js_error_text(&e));
        }
    }
}

fn show_now(element: &Element) {
    apply_style(element, shown_style(0, 0, REVEAL_EASING));
}

/// Play the title, subtitle, buttons entrance once.
pub fn play_hero_entrance() {
    let Some(document) = document() else {
        return;
    };
    for step in HERO_SEQUENCE {
        let Some(element) = document.get_element_by_id(step.element_id) else {
            log::debug!("Hero element #{} not on page", step.element_id);
            continue;
        };
        apply_style(&element, hidden_style(step.offset_px));
        // Force a style flush so the transition starts from the hidden state.
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            let _ = html.offset_height();
        }
        apply_style(&element, shown_style(HERO_DURATION_MS, step.delay_ms, HERO_EASING));
    }
}

/// Hide every tracked element and reveal each one the first time it scrolls into view.
///
/// Without IntersectionObserver support everything is shown immediately.
pub fn observe_reveals(tracker: Rc<RefCell<RevealTracker>>) {
    let Some(document) = document() else {
        return;
    };
    let targets = match document.query_selector_all(REVEAL_SELECTOR) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("Reveal selector failed: {}", js_error_text(&e));
            return;
        }
    };
    let elements: Vec<Element> = (0..targets.length())
        .filter_map(|i| targets.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect();
    let observed = elements.clone();

    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        let mut tracker = tracker.borrow_mut();
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            let target = entry.target();
            match tracker.reveal_target(&observed, &target) {
                Some(delay) => {
                    apply_style(&target, shown_style(REVEAL_DURATION_MS, delay, REVEAL_EASING));
                }
                None if !observed.contains(&target) => {
                    log::debug!("Showing untracked reveal target");
                    show_now(&target);
                }
                None => {}
            }
            observer.unobserve(&target);
        }
        tracker.end_batch();
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    init.set_root_margin(REVEAL_ROOT_MARGIN);

    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => observer,
        Err(e) => {
            log::warn!("IntersectionObserver unavailable, showing content: {}", js_error_text(&e));
            elements.iter().for_each(show_now);
            return;
        }
    };

    for element in &elements {
        apply_style(element, hidden_style(REVEAL_OFFSET_PX));
        observer.observe(element);
    }
    log::debug!("Observing {} reveal targets", elements.len());

    callback.forget();
}
