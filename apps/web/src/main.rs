mod cards;
mod dom;
mod fetch;
mod lookup;

use std::rc::Rc;

use log::Level;
use region_view::location::query_param;
use region_view::model::RegionSnapshot;
use region_view::render::ids;
use region_view::{LoadError, PageLocation, RegionView, ViewConfig};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Window};

fn main() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let location = page_location(&window)?;
    let level = if query_param(&location.search, "debug").is_some() {
        Level::Debug
    } else {
        Level::Info
    };
    console_log::init_with_level(level)
        .map_err(|error| JsValue::from_str(&error.to_string()))?;
    console_error_panic_hook::set_once();

    let view = Rc::new(RegionView::from_location(&location, ViewConfig::default()));
    log::info!("loading region {} from {}", view.region(), view.region_url());

    spawn_local(load_region(document, view));

    Ok(())
}

fn page_location(window: &Window) -> Result<PageLocation, JsValue> {
    let location = window.location();
    Ok(PageLocation {
        protocol: location.protocol()?,
        hostname: location.hostname()?,
        port: location.port()?,
        search: location.search()?,
    })
}

async fn load_region(document: Document, view: Rc<RegionView>) {
    let outcome = load_snapshot(&view).await;
    let settled = view.settle(&outcome);

    dom::remove_loading(&document);

    let mounted = dom::element_by_id(&document, ids::CONTENT)
        .and_then(|container| dom::replace_children(&container, &settled.content));
    if let Err(error) = mounted {
        log::error!("failed to mount region view: {error:?}");
        return;
    }

    if !settled.wire_widgets {
        return;
    }

    if let Err(error) = lookup::attach(&document, &view) {
        log::error!("failed to wire frequency lookup: {error:?}");
    }
    cards::load(&view);
}

async fn load_snapshot(view: &RegionView) -> Result<RegionSnapshot, LoadError> {
    let outcome = fetch::fetch_json::<RegionSnapshot>(&view.region_url()).await;
    match &outcome {
        Ok(snapshot) => log::debug!(
            "region {} has {} bands and {} spotters",
            snapshot.name,
            snapshot.band_activities.len(),
            snapshot.spotters.len()
        ),
        Err(error) => log::error!("failed to load region {}: {error}", view.region()),
    }
    outcome
}
