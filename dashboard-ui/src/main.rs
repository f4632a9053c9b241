mod app;
mod bridge;
mod context;
mod mapbox;

pub mod components {
    pub mod fetched;
    pub mod forecast_chart;
    pub mod hospital_map;
    pub mod icons;
    pub mod layout;
    pub mod recommendations;
}

pub mod pages {
    pub mod agent_console;
    pub mod dashboard;
    pub mod hospital_detail;
    pub mod login;
    pub mod settings;
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to init logger");
    leptos::mount_to_body(app::App);
}
