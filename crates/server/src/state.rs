use backend::ContentBackend;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn ContentBackend>,
}
