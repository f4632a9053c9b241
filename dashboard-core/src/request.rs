use crate::error::ApiError;
use capacity_schema::{ActionPlan, Hospital, User};

/// Outcome of one keyed read, as every page consumes it.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RequestState<T> {
    #[default]
    Pending,
    Ready(T),
    Failed(ApiError),
}

/// What a page should draw for a request right now.
#[derive(Debug, PartialEq)]
pub enum Phase<'a, T> {
    Loading,
    Empty,
    Ready(&'a T),
    Failed(&'a ApiError),
}

/// Payloads that can come back successfully yet carry nothing to show.
pub trait Payload {
    fn is_empty_payload(&self) -> bool {
        false
    }
}

impl<T> Payload for Vec<T> {
    fn is_empty_payload(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Payload for Option<T> {
    fn is_empty_payload(&self) -> bool {
        self.is_none()
    }
}

impl Payload for Hospital {}
impl Payload for ActionPlan {}
impl Payload for User {}

impl<T> RequestState<T> {
    /// Lift the value of a not-yet-resolved async read.
    pub fn from_resolved(value: Option<Result<T, ApiError>>) -> Self {
        match value {
            None => RequestState::Pending,
            Some(Ok(data)) => RequestState::Ready(data),
            Some(Err(err)) => RequestState::Failed(err),
        }
    }

    /// A read in flight is `Pending` even while the previous value is still
    /// held, so a retry after a failure shows the loading view again.
    pub fn from_resource(loading: bool, value: Option<Result<T, ApiError>>) -> Self {
        if loading {
            return RequestState::Pending;
        }
        Self::from_resolved(value)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            RequestState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            RequestState::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> RequestState<U> {
        match self {
            RequestState::Pending => RequestState::Pending,
            RequestState::Ready(data) => RequestState::Ready(f(data)),
            RequestState::Failed(err) => RequestState::Failed(err),
        }
    }
}

impl<T: Payload> RequestState<T> {
    pub fn phase(&self) -> Phase<'_, T> {
        match self {
            RequestState::Pending => Phase::Loading,
            RequestState::Ready(data) if data.is_empty_payload() => Phase::Empty,
            RequestState::Ready(data) => Phase::Ready(data),
            RequestState::Failed(err) => Phase::Failed(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_read_is_loading() {
        let state: RequestState<Vec<u8>> = RequestState::from_resolved(None);
        assert_eq!(state.phase(), Phase::Loading);
    }

    #[test]
    fn empty_list_is_its_own_phase() {
        let state = RequestState::from_resolved(Some(Ok(Vec::<u8>::new())));
        assert_eq!(state.phase(), Phase::Empty);
    }

    #[test]
    fn failure_is_surfaced_not_swallowed() {
        let state: RequestState<Vec<u8>> =
            RequestState::from_resolved(Some(Err(ApiError::Transport("offline".into()))));
        assert_eq!(
            state.phase(),
            Phase::Failed(&ApiError::Transport("offline".into()))
        );
        assert!(state.ready().is_none());
    }

    #[test]
    fn refetch_after_failure_is_loading_again() {
        let stale = Some(Err(ApiError::Transport("offline".into())));
        let state: RequestState<Vec<u8>> = RequestState::from_resource(true, stale.clone());
        assert_eq!(state.phase(), Phase::Loading);

        let settled: RequestState<Vec<u8>> = RequestState::from_resource(false, stale);
        assert!(matches!(settled.phase(), Phase::Failed(_)));
    }

    #[test]
    fn no_hospitals_is_empty_not_ready() {
        let state = RequestState::from_resource(false, Some(Ok(Vec::<Hospital>::new())));
        assert_eq!(state.phase(), Phase::Empty);
    }

    #[test]
    fn map_keeps_failure() {
        let state: RequestState<Vec<u8>> = RequestState::Failed(ApiError::NotFound);
        assert_eq!(state.map(|v| v.len()), RequestState::Failed(ApiError::NotFound));
    }
}
