//! Wires the frequency lookup card to its input, button and result panel.

use std::cell::RefCell;
use std::rc::Rc;

use region_view::lookup::{ids, FrequencyLookup};
use region_view::model::FrequencyLookupResult;
use region_view::{ApiEndpoints, RegionView, ViewConfig};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, HtmlInputElement, KeyboardEvent};

use crate::dom;
use crate::fetch::fetch_json;

struct LookupWidget {
    state: RefCell<FrequencyLookup>,
    endpoints: ApiEndpoints,
    config: ViewConfig,
    input: HtmlInputElement,
    result: Element,
}

impl LookupWidget {
    fn submit(self: &Rc<Self>) {
        let request = self.state.borrow_mut().submit(&self.input.value());
        self.redraw();

        let Some(request) = request else {
            return;
        };

        let widget = Rc::clone(self);
        spawn_local(async move {
            let url = request.url(&widget.endpoints);
            log::debug!("looking up {url}");

            let outcome = fetch_json::<FrequencyLookupResult>(&url).await;
            if let Err(error) = &outcome {
                log::warn!("frequency lookup for {} failed: {error}", request.frequency);
            }

            let applied = widget.state.borrow_mut().complete(request, outcome);
            if applied {
                widget.redraw();
            }
        });
    }

    fn redraw(&self) {
        let panel = self.state.borrow().render(&self.config);
        if let Err(error) = dom::replace_with(&self.result, panel) {
            log::error!("failed to draw lookup result: {error:?}");
        }
    }
}

/// Attaches click and Enter handlers to a freshly mounted lookup card.
pub fn attach(document: &Document, view: &RegionView) -> Result<(), JsValue> {
    let input = dom::element_by_id(document, ids::INPUT)?.dyn_into::<HtmlInputElement>()?;
    let button = dom::element_by_id(document, ids::BUTTON)?;
    let result = dom::element_by_id(document, ids::RESULT)?;

    let widget = Rc::new(LookupWidget {
        state: RefCell::new(FrequencyLookup::new()),
        endpoints: view.endpoints().clone(),
        config: view.config().clone(),
        input: input.clone(),
        result,
    });

    let on_click = {
        let widget = Rc::clone(&widget);
        Closure::<dyn FnMut(Event)>::new(move |_event: Event| widget.submit())
    };
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    let on_key = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        if event.key() == "Enter" {
            event.prevent_default();
            widget.submit();
        }
    });
    input.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())?;
    on_key.forget();

    Ok(())
}
