use dashboard_core::nav::LOGIN_ROUTE;
use dashboard_core::{ApiError, Payload, Phase, RequestState};
use leptos::*;

pub fn loading_view(message: &'static str) -> View {
    view! { <div class="placeholder">{message}</div> }.into_view()
}

/// Failure with a way out: re-run the same read, or sign in again.
pub fn error_view(error: &ApiError, retry: Callback<()>) -> View {
    if matches!(error, ApiError::Unauthorized) {
        return view! {
          <div class="error">
            <span>"Your session has expired. "</span>
            <a href=LOGIN_ROUTE>"Sign in again"</a>
          </div>
        }
        .into_view();
    }
    let message = error.to_string();
    view! {
      <div class="error">
        <span>{message}</span>
        " "
        <button on:click=move |_| retry.call(())>"Retry"</button>
      </div>
    }
    .into_view()
}

/// Loading / empty / error / data, the same way on every page.
pub fn fetched<T, V>(
    state: &RequestState<T>,
    loading: &'static str,
    empty: &'static str,
    retry: Callback<()>,
    render: impl FnOnce(&T) -> V,
) -> View
where
    T: Payload,
    V: IntoView,
{
    match state.phase() {
        Phase::Loading => loading_view(loading),
        Phase::Empty => view! { <p class="empty">{empty}</p> }.into_view(),
        Phase::Ready(data) => render(data).into_view(),
        Phase::Failed(err) => error_view(err, retry),
    }
}

/// Tracked read of a resource; use inside a reactive closure. A refetch
/// reads as pending even though the resource still holds the old value.
pub fn state_of<S, T>(resource: Resource<S, Result<T, ApiError>>) -> RequestState<T>
where
    S: Clone + 'static,
    T: Clone + 'static,
{
    RequestState::from_resource(resource.loading().get(), resource.get())
}
