use crate::config::Config;
use crate::storage::DynResultStore;
use axum::extract::FromRef;

#[derive(Clone)]
pub struct AppState {
    pub store: DynResultStore,
    pub config: Config,
}

impl FromRef<AppState> for DynResultStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}
