use region_view::LoadError;
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Same-origin GET that decodes a JSON body.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, LoadError> {
    let window = web_sys::window().ok_or_else(|| LoadError::Network("no window".to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts).map_err(network_error)?;

    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network_error)?;
    let response = response_value
        .dyn_into::<Response>()
        .map_err(network_error)?;

    LoadError::check_status(response.status())?;

    let body = response.json().map_err(decode_error)?;
    let json = JsFuture::from(body).await.map_err(decode_error)?;

    serde_wasm_bindgen::from_value::<T>(json).map_err(|error| LoadError::Decode(error.to_string()))
}

fn network_error(value: JsValue) -> LoadError {
    LoadError::Network(js_error_message(&value))
}

fn decode_error(value: JsValue) -> LoadError {
    LoadError::Decode(js_error_message(&value))
}

fn js_error_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|error| String::from(error.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}
