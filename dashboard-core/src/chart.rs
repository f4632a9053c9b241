//! Forecast series -> dual-line chart.
//!
//! Arrivals and confidence share one plot region. Each line is scaled
//! against its own axis: arrivals to the series maximum, confidence to 0–100.

use crate::format::format_percent;
use capacity_schema::Forecast;
use chrono::{DateTime, NaiveDateTime};

pub const EMPTY_MESSAGE: &str = "No forecast data available";

#[derive(Clone, Debug, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub arrivals: f64,
    pub confidence_pct: f64,
}

impl ChartPoint {
    pub fn confidence_label(&self) -> String {
        format_percent(self.confidence_pct / 100.0)
    }
}

/// One point per forecast, in input order.
pub fn chart_points(forecasts: &[Forecast]) -> Vec<ChartPoint> {
    forecasts
        .iter()
        .map(|f| ChartPoint {
            label: time_label(&f.forecast_timestamp),
            arrivals: f.predicted_arrivals,
            confidence_pct: f.confidence * 100.0,
        })
        .collect()
}

/// `HH:MM:SS` of the timestamp; unparseable input is shown verbatim.
pub fn time_label(timestamp: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return dt.format("%H:%M:%S").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%H:%M:%S").to_string();
    }
    timestamp.to_string()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for ChartGeometry {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 300.0,
            padding: 40.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    pub arrivals: Vec<(f64, f64)>,
    pub confidence: Vec<(f64, f64)>,
    pub x_ticks: Vec<(f64, String)>,
    pub arrivals_max: f64,
    pub confidence_max: f64,
}

impl ChartGeometry {
    pub fn plot_left(&self) -> f64 {
        self.padding
    }

    pub fn plot_right(&self) -> f64 {
        self.width - self.padding
    }

    pub fn plot_top(&self) -> f64 {
        self.padding
    }

    pub fn plot_bottom(&self) -> f64 {
        self.height - self.padding
    }

    pub fn layout(&self, points: &[ChartPoint]) -> ChartLayout {
        let arrivals_max = points
            .iter()
            .map(|p| p.arrivals)
            .fold(0.0_f64, f64::max)
            .ceil()
            .max(1.0);
        let confidence_max = points
            .iter()
            .map(|p| p.confidence_pct)
            .fold(100.0_f64, f64::max);

        let xs: Vec<f64> = (0..points.len()).map(|i| self.x_at(i, points.len())).collect();

        ChartLayout {
            arrivals: points
                .iter()
                .zip(&xs)
                .map(|(p, x)| (*x, self.y_at(p.arrivals, arrivals_max)))
                .collect(),
            confidence: points
                .iter()
                .zip(&xs)
                .map(|(p, x)| (*x, self.y_at(p.confidence_pct, confidence_max)))
                .collect(),
            x_ticks: points
                .iter()
                .zip(&xs)
                .map(|(p, x)| (*x, p.label.clone()))
                .collect(),
            arrivals_max,
            confidence_max,
        }
    }

    fn x_at(&self, index: usize, count: usize) -> f64 {
        let span = self.plot_right() - self.plot_left();
        if count <= 1 {
            return self.plot_left() + span / 2.0;
        }
        self.plot_left() + span * index as f64 / (count - 1) as f64
    }

    fn y_at(&self, value: f64, max: f64) -> f64 {
        let span = self.plot_bottom() - self.plot_top();
        let ratio = (value / max).clamp(0.0, 1.0);
        self.plot_bottom() - span * ratio
    }
}

/// SVG `points` attribute for a polyline.
pub fn polyline(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use capacity_schema::RiskCategory;

    fn forecast(ts: &str, arrivals: f64, confidence: f64) -> Forecast {
        Forecast {
            id: ts.to_string(),
            predicted_arrivals: arrivals,
            confidence,
            risk_category: RiskCategory::Medium,
            forecast_horizon: 1,
            forecast_timestamp: ts.to_string(),
        }
    }

    #[test]
    fn empty_series_has_no_points() {
        assert!(chart_points(&[]).is_empty());
        assert!(ChartGeometry::default().layout(&[]).arrivals.is_empty());
    }

    #[test]
    fn one_point_per_forecast_in_input_order() {
        let forecasts = vec![
            forecast("2024-05-01T14:00:00", 9.0, 0.7),
            forecast("2024-05-01T12:00:00", 12.0, 0.82),
            forecast("2024-05-01T13:00:00", 4.5, 0.6),
        ];
        let points = chart_points(&forecasts);
        assert_eq!(points.len(), 3);
        assert_eq!(
            points.iter().map(|p| p.arrivals).collect::<Vec<_>>(),
            vec![9.0, 12.0, 4.5]
        );

        let layout = ChartGeometry::default().layout(&points);
        assert_eq!(layout.arrivals.len(), 3);
        assert_eq!(layout.confidence.len(), 3);
        assert_eq!(polyline(&layout.arrivals).split(' ').count(), 3);
    }

    #[test]
    fn confidence_is_scaled_to_percent() {
        let points = chart_points(&[forecast("2024-05-01T12:00:00", 3.0, 0.82)]);
        assert!((points[0].confidence_pct - 82.0).abs() < 1e-9);
        assert_eq!(points[0].confidence_label(), "82.0%");
    }

    #[test]
    fn labels_parse_naive_and_offset_timestamps() {
        assert_eq!(time_label("2024-05-01T12:30:05.123456"), "12:30:05");
        assert_eq!(time_label("2024-05-01T08:15:00+02:00"), "08:15:00");
        assert_eq!(time_label("soon"), "soon");
    }

    #[test]
    fn tallest_point_touches_plot_top() {
        let geometry = ChartGeometry::default();
        let points = chart_points(&[
            forecast("2024-05-01T12:00:00", 10.0, 0.5),
            forecast("2024-05-01T13:00:00", 5.0, 1.0),
        ]);
        let layout = geometry.layout(&points);
        assert_eq!(layout.arrivals[0].1, geometry.plot_top());
        assert_eq!(layout.confidence[1].1, geometry.plot_top());
        assert_eq!(layout.arrivals[0].0, geometry.plot_left());
        assert_eq!(layout.arrivals[1].0, geometry.plot_right());
    }

    #[test]
    fn single_point_sits_in_the_middle() {
        let geometry = ChartGeometry::default();
        let layout = geometry.layout(&chart_points(&[forecast("x", 1.0, 0.1)]));
        assert_eq!(layout.arrivals[0].0, geometry.width / 2.0);
    }
}
