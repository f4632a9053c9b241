use crate::format::escape_html;
use capacity_schema::Hospital;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapView {
    pub center: LngLat,
    pub zoom: f64,
}

impl Default for MapView {
    /// Downtown San Francisco.
    fn default() -> Self {
        Self {
            center: LngLat {
                lng: -122.4194,
                lat: 37.7749,
            },
            zoom: 12.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub hospital_id: String,
    pub position: LngLat,
    pub popup_html: String,
}

/// One marker per hospital. The map component drops every existing marker
/// and re-adds this list whenever the hospitals change.
pub fn markers(hospitals: &[Hospital]) -> Vec<Marker> {
    hospitals
        .iter()
        .map(|h| Marker {
            hospital_id: h.id.clone(),
            position: LngLat {
                lng: h.longitude,
                lat: h.latitude,
            },
            popup_html: format!("<strong>{}</strong>", escape_html(&h.name)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hospital(id: &str, name: &str, lat: f64, lng: f64) -> Hospital {
        Hospital {
            id: id.into(),
            name: name.into(),
            latitude: lat,
            longitude: lng,
            bed_count: 100,
            icu_count: 10,
            doctors_count: None,
            nurses_count: None,
            current_patients: None,
        }
    }

    #[test]
    fn default_view_is_san_francisco() {
        let view = MapView::default();
        assert_eq!(view.center, LngLat { lng: -122.4194, lat: 37.7749 });
        assert_eq!(view.zoom, 12.0);
    }

    #[test]
    fn marker_uses_lng_lat_order_and_escaped_popup() {
        let markers = markers(&[
            hospital("a", "General", 37.76, -122.40),
            hospital("b", "<script>x</script>", 37.79, -122.44),
        ]);
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].position, LngLat { lng: -122.40, lat: 37.76 });
        assert_eq!(markers[0].popup_html, "<strong>General</strong>");
        assert_eq!(
            markers[1].popup_html,
            "<strong>&lt;script&gt;x&lt;/script&gt;</strong>"
        );
    }

    #[test]
    fn no_hospitals_no_markers() {
        assert!(markers(&[]).is_empty());
    }
}
