use crate::components::fetched::{fetched, loading_view, state_of};
use crate::components::hospital_map::HospitalMap;
use crate::context::use_app;
use capacity_schema::Hospital;
use dashboard_core::nav::hospital_route;
use leptos::*;

#[component]
pub fn Dashboard() -> impl IntoView {
    let app = use_app();
    let hospitals = create_local_resource(
        || (),
        move |_| {
            let client = app.client();
            async move { client.hospitals().await }
        },
    );
    let retry = Callback::new(move |_| hospitals.refetch());
    let list = Signal::derive(move || {
        hospitals
            .get()
            .and_then(Result::ok)
            .unwrap_or_default()
    });

    // Gates the first load only; later refetches show in the table section.
    view! {
      <Show
        when=move || hospitals.with(Option::is_some)
        fallback=|| loading_view("Loading hospitals...")
      >
        <div class="page">
          <header>
            <h1>"City Dashboard"</h1>
            <p class="meta">"Real-time hospital capacity and event monitoring"</p>
          </header>

          <div class="grid-3">
            <section class="card span-2">
              <h2>"Hospital Map"</h2>
              <HospitalMap hospitals=list/>
            </section>

            <div class="stack">
              <section class="card">
                <h2>"Alerts"</h2>
                <div class="alert warn">
                  "High patient volume expected at Memorial Hospital"
                </div>
              </section>
              <section class="card">
                <h2>"Quick Stats"</h2>
                <dl>
                  <div class="row">
                    <dt>"Total Hospitals"</dt>
                    <dd>{move || list.with(Vec::len)}</dd>
                  </div>
                  <div class="row">
                    <dt>"Active Events"</dt>
                    <dd>"3"</dd>
                  </div>
                </dl>
              </section>
            </div>
          </div>

          <section class="card">
            <h2>"Hospitals"</h2>
            {move || {
                fetched(
                    &state_of(hospitals),
                    "Loading hospitals...",
                    "No hospitals registered",
                    retry,
                    |list: &Vec<Hospital>| hospital_table(list.clone()),
                )
            }}
          </section>
        </div>
      </Show>
    }
}

fn hospital_table(hospitals: Vec<Hospital>) -> impl IntoView {
    view! {
      <table class="table">
        <thead>
          <tr>
            <th>"Name"</th>
            <th>"Beds"</th>
            <th>"ICU"</th>
            <th>"Status"</th>
            <th>"Actions"</th>
          </tr>
        </thead>
        <tbody>
          <For
            each=move || hospitals.clone()
            key=|h| h.id.clone()
            children=move |h| {
                view! {
                  <tr>
                    <td><b>{h.name.clone()}</b></td>
                    <td>{h.bed_count}</td>
                    <td>{h.icu_count}</td>
                    <td><span class="badge approved">"Normal"</span></td>
                    <td><a href=hospital_route(&h.id)>"View Details"</a></td>
                  </tr>
                }
            }
          />
        </tbody>
      </table>
    }
}
