use std::sync::Arc;

use crate::store::ClubStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ClubStore>,
}
