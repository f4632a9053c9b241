use crate::components::fetched::{fetched, state_of};
use crate::context::use_app;
use capacity_schema::Recommendation;
use dashboard_core::format::format_percent;
use dashboard_core::recommendation::{badge_class, latest, supply_rows};
use leptos::*;

#[component]
pub fn Recommendations(#[prop(into)] hospital_id: Signal<String>) -> impl IntoView {
    let app = use_app();
    let recommendations = create_local_resource(
        move || hospital_id.get(),
        move |id: String| {
            let client = app.client();
            async move { client.recommendations(&id).await }
        },
    );
    let retry = Callback::new(move |_| recommendations.refetch());

    view! {
      <div class="card">
        <h2>"Recommendations"</h2>
        {move || {
            fetched(
                &state_of(recommendations),
                "Loading recommendations...",
                "No recommendations available",
                retry,
                |list: &Vec<Recommendation>| latest(list).cloned().map(latest_view),
            )
        }}
      </div>
    }
}

fn latest_view(rec: Recommendation) -> impl IntoView {
    let supplies = supply_rows(&rec.recommended_supplies)
        .into_iter()
        .map(|(label, value)| {
            view! {
              <div class="row">
                <dt>{label}</dt>
                <dd>{value}</dd>
              </div>
            }
        })
        .collect_view();

    view! {
      <div class="stack">
        <div>
          <h3>"Staffing"</h3>
          <dl>
            <div class="row">
              <dt>"Doctors"</dt>
              <dd>{rec.recommended_staffing.doctors}</dd>
            </div>
            <div class="row">
              <dt>"Nurses"</dt>
              <dd>{rec.recommended_staffing.nurses}</dd>
            </div>
          </dl>
        </div>
        <div>
          <h3>"Supplies"</h3>
          <dl>{supplies}</dl>
        </div>
        <div class="row">
          <span>"Confidence"</span>
          <b>{format_percent(rec.confidence)}</b>
        </div>
        <div>
          <span class=badge_class(rec.status)>{rec.status.as_str()}</span>
        </div>
      </div>
    }
}
