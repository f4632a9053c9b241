use capacity_schema::Forecast;
use dashboard_core::chart::{chart_points, polyline, ChartGeometry, EMPTY_MESSAGE};
use leptos::*;

const GRID_LINES: usize = 4;

#[component]
pub fn ForecastChart(forecasts: Vec<Forecast>) -> impl IntoView {
    let points = chart_points(&forecasts);
    if points.is_empty() {
        return view! { <div class="empty chart-empty">{EMPTY_MESSAGE}</div> }.into_view();
    }

    let g = ChartGeometry::default();
    let layout = g.layout(&points);
    let (left, right, top, bottom) = (g.plot_left(), g.plot_right(), g.plot_top(), g.plot_bottom());

    let grid = (0..=GRID_LINES)
        .map(|i| {
            let y = top + (bottom - top) * i as f64 / GRID_LINES as f64;
            let ratio = 1.0 - i as f64 / GRID_LINES as f64;
            let arrivals_tick = format!("{:.0}", layout.arrivals_max * ratio);
            let confidence_tick = format!("{:.0}%", layout.confidence_max * ratio);
            view! {
              <line class="grid" x1=left x2=right y1=y y2=y/>
              <text class="tick" x={left - 6.0} y={y + 4.0} text-anchor="end">{arrivals_tick}</text>
              <text class="tick" x={right + 6.0} y={y + 4.0} text-anchor="start">{confidence_tick}</text>
            }
        })
        .collect_view();

    let x_labels = layout
        .x_ticks
        .iter()
        .map(|(x, label)| {
            view! { <text class="tick" x={*x} y={bottom + 18.0} text-anchor="middle">{label.clone()}</text> }
        })
        .collect_view();

    let arrival_dots = layout
        .arrivals
        .iter()
        .map(|(x, y)| view! { <circle class="dot arrivals" cx={*x} cy={*y} r="3"/> })
        .collect_view();
    let confidence_dots = layout
        .confidence
        .iter()
        .map(|(x, y)| view! { <circle class="dot confidence" cx={*x} cy={*y} r="3"/> })
        .collect_view();

    view! {
      <div class="chart">
        <svg class="chart-svg" viewBox={format!("0 0 {} {}", g.width, g.height)}>
          {grid}
          <polyline class="line arrivals" fill="none" points={polyline(&layout.arrivals)}/>
          <polyline class="line confidence" fill="none" points={polyline(&layout.confidence)}/>
          {arrival_dots}
          {confidence_dots}
          {x_labels}
        </svg>
        <div class="legend">
          <span class="swatch arrivals"></span>
          "Predicted Arrivals"
          <span class="swatch confidence"></span>
          "Confidence %"
        </div>
        <table class="chart-data">
          <thead>
            <tr><th>"Time"</th><th>"Arrivals"</th><th>"Confidence"</th></tr>
          </thead>
          <tbody>
            {points
                .into_iter()
                .map(|p| {
                    let confidence = p.confidence_label();
                    view! {
                      <tr>
                        <td>{p.label}</td>
                        <td>{format!("{:.1}", p.arrivals)}</td>
                        <td>{confidence}</td>
                      </tr>
                    }
                })
                .collect_view()}
          </tbody>
        </table>
      </div>
    }
    .into_view()
}
