use crate::components::icons::{Icon, LogoutIcon};
use crate::context::use_app;
use dashboard_core::nav::{LOGIN_ROUTE, NAVIGATION};
use dashboard_core::Session;
use leptos::*;
use leptos_router::*;

/// Navigation bar around every signed-in page. Without a session it sends
/// the user to the login route instead.
#[component]
pub fn Shell() -> impl IntoView {
    let app = use_app();
    let location = use_location();
    let navigate = use_navigate();

    let logout = Callback::new(move |_: ()| {
        app.logout();
        navigate(LOGIN_ROUTE, Default::default());
    });

    let user_email = move || {
        app.session
            .with(|s| s.user().map(|u| u.email.clone()).unwrap_or_default())
    };

    view! {
      <Show
        when=move || app.session.with(Session::is_authenticated)
        fallback=|| view! { <Redirect path=LOGIN_ROUTE/> }
      >
        <div class="shell">
          <nav class="topbar">
            <h1 class="brand">"FestSafe AI"</h1>
            <div class="nav-links">
              {NAVIGATION
                  .iter()
                  .map(|item| {
                      let item = *item;
                      let class = move || {
                          if location.pathname.with(|p| item.is_active(p)) {
                              "nav-link active"
                          } else {
                              "nav-link"
                          }
                      };
                      view! {
                        <a href=item.href class=class>
                          <Icon icon=item.icon/>
                          {item.name}
                        </a>
                      }
                  })
                  .collect_view()}
            </div>
            <div class="nav-user">
              <span class="meta">{user_email}</span>
              <button class="icon-button" title="Log out" on:click=move |_| logout.call(())>
                <LogoutIcon/>
              </button>
            </div>
          </nav>
          <main class="content">
            <Outlet/>
          </main>
        </div>
      </Show>
    }
}
