//! ECharts-backed chart surfaces and the single window resize hook.

use crate::js_bridge;
use brd_dashboard::{ChartSurface, Dashboard, DashboardError, ViewKind};
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// The mounted dashboard as shared by event handlers.
pub type DashboardHandle = Rc<RefCell<Dashboard<EchartsSurface>>>;

/// Look up an element by id, failing loudly when the page lacks it.
pub fn element_by_id(id: &str) -> Result<web_sys::Element, DashboardError> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .ok_or_else(|| DashboardError::MissingElement(id.to_string()))
}

/// One ECharts instance bound to one view's container.
pub struct EchartsSurface {
    kind: ViewKind,
    element: web_sys::Element,
}

impl EchartsSurface {
    /// Bind to the view's container. Used as the `mount_view` callback of `startup`.
    pub fn mount(kind: ViewKind) -> Result<Self, DashboardError> {
        js_bridge::init_charts().map_err(|reason| DashboardError::Render { view: kind, reason })?;
        let element = element_by_id(kind.container_id())?;
        Ok(Self { kind, element })
    }
}

impl ChartSurface for EchartsSurface {
    fn set_option(&mut self, option: &Value) -> Result<(), DashboardError> {
        js_bridge::set_option(&self.element, &option.to_string()).map_err(|reason| {
            DashboardError::Render {
                view: self.kind,
                reason,
            }
        })
    }

    fn resize(&mut self) {
        js_bridge::resize(&self.element);
    }
}

impl Drop for EchartsSurface {
    fn drop(&mut self) {
        js_bridge::dispose(&self.element);
    }
}

/// Route every window resize to `Dashboard::on_resize`. One listener for all views.
pub fn install_resize_listener(handle: DashboardHandle) {
    let closure = Closure::wrap(Box::new(move || {
        if let Ok(mut dashboard) = handle.try_borrow_mut() {
            dashboard.on_resize();
        }
    }) as Box<dyn FnMut()>);

    if let Some(window) = web_sys::window() {
        if let Err(e) =
            window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
        {
            log::warn!("Could not attach resize listener: {}", js_bridge::js_error_text(&e));
        }
    }

    // Lives as long as the page.
    closure.forget();
}
