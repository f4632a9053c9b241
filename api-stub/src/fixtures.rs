use capacity_schema::{
    Forecast, Hospital, OpenMap, Recommendation, RecommendationStatus, RiskCategory, Staffing,
};

/// Timestamp stamped on every generated payload, so responses are stable.
pub const GENERATED_AT: &str = "2024-07-04T00:00:00";

/// Longest forecast window accepted, in hours.
pub const MAX_WINDOW_HOURS: u32 = 48;

pub struct Fixtures {
    pub hospitals: Vec<Hospital>,
    /// `(hospital_id, recommendation)`, newest first per hospital.
    pub recommendations: Vec<(String, Recommendation)>,
}

impl Fixtures {
    pub fn seeded() -> Self {
        let hospitals = vec![
            hospital(
                "9b2f6c1e-3d4a-4f6b-8a1c-2e5d7f9a0b11",
                "Zuckerberg San Francisco General",
                37.7557,
                -122.4048,
                (284, 42),
                (96, 310, 187),
            ),
            hospital(
                "4c8e2a7d-1f3b-4e9c-b6d5-7a0f2c4e8d22",
                "UCSF Medical Center at Parnassus",
                37.7631,
                -122.4576,
                (600, 88),
                (210, 640, 455),
            ),
            hospital(
                "e1d3b5f7-9a2c-4b6e-8d0f-3c5a7e9b1d33",
                "CPMC Van Ness Campus",
                37.7862,
                -122.4211,
                (274, 30),
                (80, 250, 142),
            ),
        ];

        let recommendations = vec![
            (
                hospitals[0].id.clone(),
                recommendation(
                    "rec-0001",
                    (4, 10),
                    &[("beds", 20), ("oxygen_liters", 1500), ("iv_fluids", 60)],
                    0.84,
                    RecommendationStatus::Pending,
                ),
            ),
            (
                hospitals[0].id.clone(),
                recommendation(
                    "rec-0002",
                    (2, 6),
                    &[("beds", 10), ("oxygen_liters", 700)],
                    0.71,
                    RecommendationStatus::Approved,
                ),
            ),
            (
                hospitals[1].id.clone(),
                recommendation(
                    "rec-0003",
                    (3, 8),
                    &[("beds", 12)],
                    0.77,
                    RecommendationStatus::Rejected,
                ),
            ),
        ];

        Self {
            hospitals,
            recommendations,
        }
    }

    pub fn hospital(&self, id: &str) -> Option<&Hospital> {
        self.hospitals.iter().find(|h| h.id == id)
    }

    pub fn recommendations(&self, hospital_id: Option<&str>) -> Vec<Recommendation> {
        self.recommendations
            .iter()
            .filter(|(owner, _)| hospital_id.map_or(true, |id| owner == id))
            .map(|(_, rec)| rec.clone())
            .collect()
    }
}

/// Parses `24h`-style windows.
pub fn parse_window(raw: &str) -> Option<u32> {
    let hours: u32 = raw.trim().strip_suffix('h')?.parse().ok()?;
    (1..=MAX_WINDOW_HOURS).contains(&hours).then_some(hours)
}

/// One point per hour of the window, in time order. Arrivals follow a daily
/// curve scaled by the hospital's size; confidence decays with the horizon.
pub fn forecasts(hospital: &Hospital, hours: u32) -> Vec<Forecast> {
    let base = f64::from(hospital.bed_count) / 40.0;
    (0..hours)
        .map(|hour| {
            let phase = f64::from(hour % 24) / 24.0 * std::f64::consts::TAU;
            let arrivals = round1(base * (1.0 + 0.6 * (phase - 1.2).sin()));
            Forecast {
                id: format!("{}-h{:02}", hospital.id, hour + 1),
                predicted_arrivals: arrivals,
                confidence: round2(0.9 - 0.01 * f64::from(hour)),
                risk_category: risk_for(arrivals),
                forecast_horizon: hour + 1,
                forecast_timestamp: format!("2024-07-{:02}T{:02}:00:00", 4 + hour / 24, hour % 24),
            }
        })
        .collect()
}

pub fn risk_for(arrivals: f64) -> RiskCategory {
    if arrivals < 5.0 {
        RiskCategory::Low
    } else if arrivals < 15.0 {
        RiskCategory::Medium
    } else {
        RiskCategory::High
    }
}

fn hospital(
    id: &str,
    name: &str,
    latitude: f64,
    longitude: f64,
    (bed_count, icu_count): (u32, u32),
    (doctors, nurses, patients): (u32, u32, u32),
) -> Hospital {
    Hospital {
        id: id.into(),
        name: name.into(),
        latitude,
        longitude,
        bed_count,
        icu_count,
        doctors_count: Some(doctors),
        nurses_count: Some(nurses),
        current_patients: Some(patients),
    }
}

fn recommendation(
    id: &str,
    (doctors, nurses): (u32, u32),
    supplies: &[(&str, u32)],
    confidence: f64,
    status: RecommendationStatus,
) -> Recommendation {
    Recommendation {
        id: id.into(),
        recommended_staffing: Staffing { doctors, nurses },
        recommended_supplies: supplies
            .iter()
            .map(|&(key, amount)| (key.to_string(), amount.into()))
            .collect::<OpenMap>(),
        confidence,
        status,
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use capacity_schema::Validate;

    #[test]
    fn seeded_fixtures_pass_validation() {
        let fixtures = Fixtures::seeded();
        assert_eq!(fixtures.hospitals.len(), 3);
        fixtures.hospitals.validate().expect("hospitals");
        fixtures.recommendations(None).validate().expect("recommendations");
    }

    #[test]
    fn one_forecast_point_per_hour() {
        let fixtures = Fixtures::seeded();
        let h = &fixtures.hospitals[0];
        for hours in [1, 6, 24] {
            let series = forecasts(h, hours);
            assert_eq!(series.len(), hours as usize);
            let horizons: Vec<u32> = series.iter().map(|f| f.forecast_horizon).collect();
            assert_eq!(horizons, (1..=hours).collect::<Vec<_>>());
        }
        forecasts(h, 24).validate().expect("valid series");
    }

    #[test]
    fn windows_parse_in_hours() {
        assert_eq!(parse_window("24h"), Some(24));
        assert_eq!(parse_window("1h"), Some(1));
        assert_eq!(parse_window("0h"), None);
        assert_eq!(parse_window("24"), None);
        assert_eq!(parse_window("day"), None);
        assert_eq!(parse_window("72h"), None);
    }

    #[test]
    fn recommendations_filter_by_hospital() {
        let fixtures = Fixtures::seeded();
        let first = fixtures.hospitals[0].id.clone();
        let third = fixtures.hospitals[2].id.clone();
        assert_eq!(fixtures.recommendations(Some(&first)).len(), 2);
        assert!(fixtures.recommendations(Some(&third)).is_empty());
        assert_eq!(fixtures.recommendations(None).len(), 3);
    }

    #[test]
    fn risk_bands() {
        assert_eq!(risk_for(4.9), RiskCategory::Low);
        assert_eq!(risk_for(5.0), RiskCategory::Medium);
        assert_eq!(risk_for(15.0), RiskCategory::High);
    }
}
