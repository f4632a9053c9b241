use crate::components::fetched::{fetched, state_of};
use crate::components::forecast_chart::ForecastChart;
use crate::components::recommendations::Recommendations;
use crate::context::use_app;
use capacity_schema::{Forecast, Hospital};
use dashboard_core::chart::EMPTY_MESSAGE;
use dashboard_core::format::count_or_na;
use dashboard_core::{ApiError, ForecastWindow, RequestState};
use leptos::*;
use leptos_router::*;

#[component]
pub fn HospitalDetail() -> impl IntoView {
    let app = use_app();
    let params = use_params_map();
    let hospital_id =
        Signal::derive(move || params.with(|p| p.get("id").cloned().unwrap_or_default()));

    let hospital = create_local_resource(
        move || hospital_id.get(),
        move |id: String| {
            let client = app.client();
            async move {
                if id.is_empty() {
                    return Err(ApiError::NotFound);
                }
                client.hospital(&id).await
            }
        },
    );
    let forecasts = create_local_resource(
        move || hospital_id.get(),
        move |id: String| {
            let client = app.client();
            async move {
                if id.is_empty() {
                    return Ok(Vec::new());
                }
                client.forecasts(&id, ForecastWindow::default()).await
            }
        },
    );
    let retry_hospital = Callback::new(move |_| hospital.refetch());
    let retry_forecasts = Callback::new(move |_| forecasts.refetch());

    let forecast_panel = move || {
        fetched(
            &state_of(forecasts),
            "Loading forecasts...",
            EMPTY_MESSAGE,
            retry_forecasts,
            |list: &Vec<Forecast>| view! { <ForecastChart forecasts=list.clone()/> },
        )
    };

    move || match state_of(hospital) {
        RequestState::Failed(ApiError::NotFound) => {
            view! { <div class="placeholder">"Hospital not found"</div> }.into_view()
        }
        state => fetched(
            &state,
            "Loading hospital details...",
            "Hospital not found",
            retry_hospital,
            |h: &Hospital| {
                view! {
                  <div class="page">
                    <header class="row">
                      <div>
                        <h1>{h.name.clone()}</h1>
                        <p class="meta">"Hospital details and forecasts"</p>
                      </div>
                      <a href="/">"← Back to Dashboard"</a>
                    </header>

                    <div class="grid-3">
                      <div class="span-2 stack">
                        {metrics(h)}
                        <section class="card">
                          <h2>"Forecast"</h2>
                          {forecast_panel}
                        </section>
                      </div>
                      <Recommendations hospital_id=hospital_id/>
                    </div>
                  </div>
                }
            },
        ),
    }
}

fn metrics(h: &Hospital) -> impl IntoView {
    view! {
      <section class="card">
        <h2>"Current Metrics"</h2>
        <dl class="metrics">
          <div><dt>"Total Beds"</dt><dd>{h.bed_count}</dd></div>
          <div><dt>"ICU Beds"</dt><dd>{h.icu_count}</dd></div>
          <div><dt>"Doctors"</dt><dd>{count_or_na(h.doctors_count)}</dd></div>
          <div><dt>"Nurses"</dt><dd>{count_or_na(h.nurses_count)}</dd></div>
          <div><dt>"Current Patients"</dt><dd>{count_or_na(h.current_patients)}</dd></div>
        </dl>
      </section>
    }
}
