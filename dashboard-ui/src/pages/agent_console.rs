use crate::components::fetched::{fetched, state_of};
use crate::context::use_app;
use capacity_schema::{display_value, ActionPlan, AgentAction, Hospital, OpenMap};
use dashboard_core::console::{ConsoleState, ObservationForm};
use dashboard_core::format::format_percent;
use dashboard_core::recommendation::supply_rows;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn AgentConsole() -> impl IntoView {
    let app = use_app();
    let hospitals = create_local_resource(
        || (),
        move |_| {
            let client = app.client();
            async move { client.hospitals().await }
        },
    );
    let retry_hospitals = Callback::new(move |_| hospitals.refetch());

    let selected = create_rw_signal(String::new());
    let form = create_rw_signal(ObservationForm::default());
    let console = create_rw_signal(ConsoleState::Idle);
    let form_error = create_rw_signal(None::<String>);

    let submit = move || {
        let hospital_id = selected.get_untracked();
        let mut next = console.get_untracked();
        match form.with_untracked(|f| next.begin(&hospital_id, f)) {
            Ok(request) => {
                console.set(next);
                form_error.set(None);
                let client = app.client();
                spawn_local(async move {
                    let result = client.ask_agents(&request).await;
                    // The page may be gone by now; the result is then dropped.
                    console.try_update(|state| state.finish(result));
                });
            }
            Err(e) => form_error.set(Some(e.to_string())),
        }
    };

    let hospital_options = move || {
        fetched(
            &state_of(hospitals),
            "Loading hospitals...",
            "No hospitals registered",
            retry_hospitals,
            |list: &Vec<Hospital>| {
                let options = list
                    .iter()
                    .map(|h| view! { <option value=h.id.clone()>{h.name.clone()}</option> })
                    .collect_view();
                view! {
                  <select
                    prop:value=move || selected.get()
                    on:change=move |ev| selected.set(event_target_value(&ev))
                  >
                    <option value="">"Select a hospital"</option>
                    {options}
                  </select>
                }
            },
        )
    };

    view! {
      <div class="page">
        <header>
          <h1>"Agent Console"</h1>
          <p class="meta">"Multi-agent decision-making system"</p>
        </header>

        <section class="card">
          <form
            class="stack"
            on:submit=move |ev| {
                ev.prevent_default();
                submit();
            }
          >
            <label class="field">
              <span>"Select Hospital"</span>
              {hospital_options}
            </label>

            <h3>"Current Metrics"</h3>
            <div class="grid-3">
              {field("Current patients", form, |f| &f.current_patients, |f, v| f.current_patients = v)}
              {field("New arrivals", form, |f| &f.new_arrivals, |f, v| f.new_arrivals = v)}
              {field("Complaint codes", form, |f| &f.complaint_codes, |f, v| f.complaint_codes = v)}
            </div>

            <h3>"Environmental Context"</h3>
            <div class="grid-3">
              {field("AQI", form, |f| &f.aqi, |f, v| f.aqi = v)}
              {field("Temperature (°C)", form, |f| &f.temperature, |f, v| f.temperature = v)}
              {field("Humidity (%)", form, |f| &f.humidity, |f, v| f.humidity = v)}
            </div>

            <button
              type="submit"
              class="primary"
              disabled=move || !console.with(|c| c.can_submit(&selected.get()))
            >
              {move || console.with(ConsoleState::button_label)}
            </button>
            {move || form_error.get().map(|e| view! { <p class="error">{e}</p> })}
          </form>
        </section>

        {move || match console.get() {
            ConsoleState::Succeeded(plan) => plan_view(plan).into_view(),
            ConsoleState::Failed(err) => {
                view! { <p class="error">{format!("Agents failed: {err}")}</p> }.into_view()
            }
            ConsoleState::Idle | ConsoleState::Submitting => ().into_view(),
        }}
      </div>
    }
}

fn field(
    label: &'static str,
    form: RwSignal<ObservationForm>,
    get: fn(&ObservationForm) -> &String,
    set: fn(&mut ObservationForm, String),
) -> impl IntoView {
    view! {
      <label class="field">
        <span>{label}</span>
        <input
          prop:value=move || form.with(|f| get(f).clone())
          on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
        />
      </label>
    }
}

fn plan_view(plan: ActionPlan) -> impl IntoView {
    let supplies = supply_rows(&plan.recommended_supplies)
        .into_iter()
        .map(|(label, value)| view! { <li>{format!("{label}: {value}")}</li> })
        .collect_view();
    let messages = plan
        .messages_for_public
        .into_iter()
        .map(|m| view! { <li>{m}</li> })
        .collect_view();
    let templates = plan
        .suggested_triage_templates
        .iter()
        .map(|t| view! { <li>{open_map_view(t)}</li> })
        .collect_view();
    let actions = plan
        .agent_actions
        .into_iter()
        .map(action_view)
        .collect_view();

    view! {
      <div class="stack">
        <section class="card">
          <h2>"Action Plan"</h2>
          <h3>"Recommended Staffing"</h3>
          <p>
            {format!(
                "Doctors: {}, Nurses: {}",
                plan.recommended_staffing.doctors,
                plan.recommended_staffing.nurses,
            )}
          </p>
          <h3>"Recommended Supplies"</h3>
          <ul>{supplies}</ul>
          <h3>"Confidence"</h3>
          <p>{format_percent(plan.confidence)}</p>
          <h3>"Public Messages"</h3>
          <ul>{messages}</ul>
          <h3>"Suggested Triage"</h3>
          <ul>{templates}</ul>
        </section>

        <section class="card">
          <h2>"Agent Actions"</h2>
          <div class="stack">{actions}</div>
        </section>
      </div>
    }
}

fn action_view(action: AgentAction) -> impl IntoView {
    view! {
      <div class="agent-action">
        <h3>{format!("{} Agent", action.agent_type)}</h3>
        <p class="meta">{format!("Confidence: {}", format_percent(action.confidence))}</p>
        <h4>"Reasoning:"</h4>
        <ol class="trace">
          {action
              .reasoning_trace
              .into_iter()
              .map(|step| view! { <li>{step}</li> })
              .collect_view()}
        </ol>
      </div>
    }
}

fn open_map_view(map: &OpenMap) -> impl IntoView {
    map.iter()
        .map(|(k, v)| format!("{k}: {}", display_value(v)))
        .collect::<Vec<_>>()
        .join("; ")
}
