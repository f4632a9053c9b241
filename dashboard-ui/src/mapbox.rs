//! Minimal `mapboxgl` bindings. The library itself is loaded by index.html.

use dashboard_core::map::{LngLat, MapView};
use dashboard_core::MapConfig;
use js_sys::{Object, Reflect};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = mapboxgl, js_name = Map)]
    pub type MapboxMap;

    #[wasm_bindgen(catch, constructor, js_namespace = mapboxgl, js_class = "Map")]
    fn new(options: &JsValue) -> Result<MapboxMap, JsValue>;

    #[wasm_bindgen(method)]
    pub fn remove(this: &MapboxMap);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = mapboxgl, js_name = Marker)]
    pub type MapboxMarker;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl, js_class = "Marker")]
    fn new() -> MapboxMarker;

    #[wasm_bindgen(method, js_name = setLngLat)]
    fn set_lng_lat(this: &MapboxMarker, lng_lat: &JsValue) -> MapboxMarker;

    #[wasm_bindgen(method, js_name = setPopup)]
    fn set_popup(this: &MapboxMarker, popup: &MapboxPopup) -> MapboxMarker;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &MapboxMarker, map: &MapboxMap) -> MapboxMarker;

    #[wasm_bindgen(method)]
    pub fn remove(this: &MapboxMarker);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = mapboxgl, js_name = Popup)]
    pub type MapboxPopup;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl, js_class = "Popup")]
    fn new() -> MapboxPopup;

    #[wasm_bindgen(method, js_name = setHTML)]
    fn set_html(this: &MapboxPopup, html: &str) -> MapboxPopup;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MapOptions<'a> {
    style: &'a str,
    center: [f64; 2],
    zoom: f64,
    access_token: &'a str,
}

fn lng_lat(position: LngLat) -> JsValue {
    js_sys::Array::of2(&position.lng.into(), &position.lat.into()).into()
}

impl MapboxMap {
    pub fn create(
        container: &web_sys::HtmlElement,
        config: &MapConfig,
        view: MapView,
    ) -> Result<MapboxMap, String> {
        let options = MapOptions {
            style: &config.style,
            center: [view.center.lng, view.center.lat],
            zoom: view.zoom,
            access_token: &config.access_token,
        };
        let options = options
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| e.to_string())?;
        let options: Object = options.unchecked_into();
        Reflect::set(&options, &JsValue::from_str("container"), container)
            .map_err(|e| format!("failed to set map container: {e:?}"))?;
        MapboxMap::new(&options).map_err(|e| format!("mapboxgl.Map failed: {e:?}"))
    }
}

impl MapboxMarker {
    pub fn place(map: &MapboxMap, marker: &dashboard_core::map::Marker) -> MapboxMarker {
        let popup = MapboxPopup::new().set_html(&marker.popup_html);
        MapboxMarker::new()
            .set_lng_lat(&lng_lat(marker.position))
            .set_popup(&popup)
            .add_to(map)
    }
}
