use crate::{require, SchemaError, Validate};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hospital {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub bed_count: u32,
    pub icu_count: u32,
    #[serde(default)]
    pub doctors_count: Option<u32>,
    #[serde(default)]
    pub nurses_count: Option<u32>,
    #[serde(default)]
    pub current_patients: Option<u32>,
}

impl Validate for Hospital {
    fn validate(&self) -> Result<(), SchemaError> {
        require("id", &self.id)?;
        require("name", &self.name)?;
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(SchemaError::OutOfRange {
                field: "latitude",
                value: self.latitude.to_string(),
            });
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(SchemaError::OutOfRange {
                field: "longitude",
                value: self.longitude.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_record_with_extra_fields() {
        let raw = r#"{
          "id": "4f7c", "name": "Memorial Hospital",
          "latitude": 37.77, "longitude": -122.41,
          "bed_count": 200, "icu_count": 20,
          "oxygen_capacity": 5000, "doctors_count": 30,
          "created_at": "2024-05-01T10:00:00"
        }"#;
        let hospital: Hospital = serde_json::from_str(raw).expect("decode");
        assert_eq!(hospital.doctors_count, Some(30));
        assert_eq!(hospital.nurses_count, None);
        assert!(hospital.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        let hospital = Hospital {
            id: "h".into(),
            name: "Bad Geo".into(),
            latitude: 123.0,
            longitude: 0.0,
            bed_count: 1,
            icu_count: 0,
            doctors_count: None,
            nurses_count: None,
            current_patients: None,
        };
        assert!(matches!(
            hospital.validate(),
            Err(SchemaError::OutOfRange { field: "latitude", .. })
        ));
    }
}
