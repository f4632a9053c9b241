use crate::bridge;
use crate::components::layout::Shell;
use crate::context::AppContext;
use crate::pages::agent_console::AgentConsole;
use crate::pages::dashboard::Dashboard;
use crate::pages::hospital_detail::HospitalDetail;
use crate::pages::login::Login;
use crate::pages::settings::Settings;
use dashboard_core::nav::LOGIN_ROUTE;
use dashboard_core::ConfigError;
use leptos::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
    match bridge::load_config() {
        Ok(config) => {
            log::info!("dashboard starting against {}", config.api_base_url);
            provide_context(AppContext::new(config));
            routes().into_view()
        }
        Err(err) => {
            log::error!("dashboard configuration rejected: {err}");
            config_error(err).into_view()
        }
    }
}

fn routes() -> impl IntoView {
    view! {
      <Router>
        <Routes>
          <Route path=LOGIN_ROUTE view=Login/>
          <Route path="" view=Shell>
            <Route path="" view=Dashboard/>
            <Route path="hospital/:id" view=HospitalDetail/>
            <Route path="agents" view=AgentConsole/>
            <Route path="settings" view=Settings/>
            <Route path="*any" view=NotFound/>
          </Route>
        </Routes>
      </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
      <div class="page">
        <h1>"Page not found"</h1>
        <a href="/">"Back to Dashboard"</a>
      </div>
    }
}

fn config_error(err: ConfigError) -> impl IntoView {
    view! {
      <div class="login">
        <div class="card stack">
          <h1 class="brand">"FestSafe AI"</h1>
          <p class="error">{err.to_string()}</p>
          <p class="meta">
            "Set the value in a "
            <code>"<meta name=\"festsafe:...\">"</code>
            " tag in index.html or in the matching FESTSAFE_* variable at build time."
          </p>
        </div>
      </div>
    }
}
