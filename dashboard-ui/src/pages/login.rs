use crate::context::use_app;
use capacity_schema::LoginRequest;
use dashboard_core::Session;
use leptos::*;
use leptos_router::use_navigate;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn Login() -> impl IntoView {
    let app = use_app();
    let navigate = use_navigate();
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let pending = create_rw_signal(false);
    let error = create_rw_signal(None::<String>);

    let submit = move || {
        if pending.get_untracked() {
            return;
        }
        let credentials = LoginRequest {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        if credentials.email.is_empty() || credentials.password.is_empty() {
            error.set(Some("Email and password are required".into()));
            return;
        }
        pending.set(true);
        error.set(None);
        let navigate = navigate.clone();
        spawn_local(async move {
            match app.client().login(&credentials).await {
                Ok(token) => {
                    let session = Session::signed_in(token);
                    let session = match app.client().with_session(&session).me().await {
                        Ok(user) => session.with_user(user),
                        Err(e) => {
                            log::warn!("signed in but could not load profile: {e}");
                            session
                        }
                    };
                    log::info!("signed in as {}", credentials.email);
                    app.session.set(session);
                    let _ = pending.try_set(false);
                    navigate("/", Default::default());
                }
                Err(e) => {
                    let _ = pending.try_set(false);
                    let _ = error.try_set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
      <div class="login">
        <form
          class="card stack"
          on:submit=move |ev| {
              ev.prevent_default();
              submit();
          }
        >
          <h1 class="brand">"FestSafe AI"</h1>
          <p class="meta">"Sign in to the hospital capacity dashboard"</p>
          <label class="field">
            <span>"Email"</span>
            <input
              type="email"
              autocomplete="username"
              prop:value=move || email.get()
              on:input=move |ev| email.set(event_target_value(&ev))
            />
          </label>
          <label class="field">
            <span>"Password"</span>
            <input
              type="password"
              autocomplete="current-password"
              prop:value=move || password.get()
              on:input=move |ev| password.set(event_target_value(&ev))
            />
          </label>
          <button type="submit" class="primary" disabled=move || pending.get()>
            {move || if pending.get() { "Signing in..." } else { "Sign in" }}
          </button>
          {move || error.get().map(|e| view! { <p class="error">{e}</p> })}
        </form>
      </div>
    }
}
