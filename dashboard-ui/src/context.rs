use crate::bridge::GlooTransport;
use dashboard_core::settings::Settings;
use dashboard_core::{ApiClient, DashboardConfig, Session};
use leptos::*;

/// Everything pages share. Created once in `App` and provided as context;
/// all fields are handles, so the struct is `Copy`.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub config: StoredValue<DashboardConfig>,
    pub session: RwSignal<Session>,
    pub settings: RwSignal<Settings>,
}

impl AppContext {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config: store_value(config),
            session: create_rw_signal(Session::anonymous()),
            settings: create_rw_signal(Settings::default()),
        }
    }

    /// A client carrying the session token as of now.
    pub fn client(&self) -> ApiClient<GlooTransport> {
        let base_url = self.config.with_value(|c| c.api_base_url.clone());
        self.session
            .with_untracked(|s| ApiClient::new(base_url, GlooTransport).with_session(s))
    }

    pub fn logout(&self) {
        self.session.update(Session::logout);
    }
}

pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}
