use crate::context::use_app;
use dashboard_core::settings::SettingsForm;
use leptos::*;

#[derive(Clone, PartialEq)]
enum Notice {
    Saved(&'static str),
    Invalid(String),
}

#[component]
pub fn Settings() -> impl IntoView {
    let app = use_app();
    let form = create_rw_signal(app.settings.with_untracked(|s| SettingsForm::from(s)));
    let notice = create_rw_signal(None::<Notice>);

    let save_integrations = move |_| {
        let next = form.with_untracked(|f| app.settings.with_untracked(|s| f.apply_integrations(s)));
        app.settings.set(next);
        notice.set(Some(Notice::Saved("API keys saved for this session")));
    };

    let save_thresholds = move |_| {
        match form.with_untracked(|f| app.settings.with_untracked(|s| f.apply_thresholds(s))) {
            Ok(next) => {
                app.settings.set(next);
                notice.set(Some(Notice::Saved("Risk thresholds saved")));
            }
            Err(e) => notice.set(Some(Notice::Invalid(e.to_string()))),
        }
    };

    view! {
      <div class="page">
        <header>
          <h1>"Settings"</h1>
          <p class="meta">"Configure system settings and integrations"</p>
        </header>

        {move || notice.get().map(|n| match n {
            Notice::Saved(msg) => view! { <p class="notice">{msg}</p> }.into_view(),
            Notice::Invalid(msg) => view! { <p class="error">{msg}</p> }.into_view(),
        })}

        <section class="card stack">
          <h2>"API Integrations"</h2>
          <label class="field">
            <span>"AQI API Key"</span>
            <input
              type="password"
              prop:value=move || form.with(|f| f.aqi_api_key.clone())
              on:input=move |ev| form.update(|f| f.aqi_api_key = event_target_value(&ev))
            />
          </label>
          <label class="field">
            <span>"Weather API Key"</span>
            <input
              type="password"
              prop:value=move || form.with(|f| f.weather_api_key.clone())
              on:input=move |ev| form.update(|f| f.weather_api_key = event_target_value(&ev))
            />
          </label>
          <button class="primary" on:click=save_integrations>"Save"</button>
        </section>

        <section class="card stack">
          <h2>"Risk Thresholds"</h2>
          <label class="field">
            <span>"Low Risk Threshold (arrivals/hour)"</span>
            <input
              type="number"
              prop:value=move || form.with(|f| f.low_risk_threshold.clone())
              on:input=move |ev| form.update(|f| f.low_risk_threshold = event_target_value(&ev))
            />
          </label>
          <label class="field">
            <span>"High Risk Threshold (arrivals/hour)"</span>
            <input
              type="number"
              prop:value=move || form.with(|f| f.high_risk_threshold.clone())
              on:input=move |ev| form.update(|f| f.high_risk_threshold = event_target_value(&ev))
            />
          </label>
          <button class="primary" on:click=save_thresholds>"Save"</button>
        </section>
      </div>
    }
}
