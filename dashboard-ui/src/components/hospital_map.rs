use crate::context::use_app;
use crate::mapbox::{MapboxMap, MapboxMarker};
use capacity_schema::Hospital;
use dashboard_core::map::{markers, MapView};
use leptos::*;

/// Mapbox view with one marker per hospital. Markers are rebuilt from
/// scratch on every list change; the map is removed on unmount.
#[component]
pub fn HospitalMap(#[prop(into)] hospitals: Signal<Vec<Hospital>>) -> impl IntoView {
    let app = use_app();
    let container = create_node_ref::<html::Div>();
    let map = store_value(None::<MapboxMap>);
    let placed = store_value(Vec::<MapboxMarker>::new());
    let ready = create_rw_signal(false);
    let failure = create_rw_signal(None::<String>);

    container.on_load(move |el| {
        let config = app.config.with_value(|c| c.map.clone());
        match MapboxMap::create(&el, &config, MapView::default()) {
            Ok(created) => {
                log::debug!("map initialised");
                map.set_value(Some(created));
                ready.set(true);
            }
            Err(e) => {
                log::warn!("map unavailable: {e}");
                failure.set(Some(e));
            }
        }
    });

    create_effect(move |_| {
        let wanted = markers(&hospitals.get());
        if !ready.get() {
            return;
        }
        map.with_value(|m| {
            let Some(m) = m else {
                return;
            };
            placed.update_value(|current| {
                for marker in current.drain(..) {
                    marker.remove();
                }
                current.extend(wanted.iter().map(|w| MapboxMarker::place(m, w)));
            });
        });
    });

    on_cleanup(move || {
        placed.try_update_value(|current| current.drain(..).for_each(|m| m.remove()));
        map.try_update_value(|m| {
            if let Some(m) = m.take() {
                m.remove();
                log::debug!("map torn down");
            }
        });
    });

    view! {
      <div class="map-frame">
        <div node_ref=container class="map"></div>
        {move || failure.get().map(|e| view! { <p class="error">{format!("Map unavailable: {e}")}</p> })}
      </div>
    }
}
