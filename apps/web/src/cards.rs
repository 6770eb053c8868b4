//! Regions and server stats cards, each loaded on its own after the region
//! itself has rendered.

use std::rc::Rc;

use region_view::model::{RegionList, ServerStats};
use region_view::render::{self, ids};
use region_view::RegionView;
use wasm_bindgen_futures::spawn_local;

use crate::dom;
use crate::fetch::fetch_json;

pub fn load(view: &Rc<RegionView>) {
    spawn_local(load_regions(Rc::clone(view)));
    spawn_local(load_stats(Rc::clone(view)));
}

async fn load_regions(view: Rc<RegionView>) {
    let body = match fetch_json::<RegionList>(&view.endpoints().regions()).await {
        Ok(list) => render::regions_body(&list, view.region()),
        Err(error) => {
            log::warn!("failed to load region list: {error}");
            render::secondary_failure("regions", &error)
        }
    };
    mount(ids::REGIONS_BODY, body);
}

async fn load_stats(view: Rc<RegionView>) {
    let body = match fetch_json::<ServerStats>(&view.endpoints().stats()).await {
        Ok(stats) => render::stats_body(&stats),
        Err(error) => {
            log::warn!("failed to load server stats: {error}");
            render::secondary_failure("server stats", &error)
        }
    };
    mount(ids::STATS_BODY, body);
}

fn mount(id: &str, body: region_view::html::Element) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };

    let result =
        dom::element_by_id(&document, id).and_then(|target| dom::replace_with(&target, body));
    if let Err(error) = result {
        log::error!("failed to mount #{id}: {error:?}");
    }
}
