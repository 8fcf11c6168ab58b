use std::sync::Arc;

use pirep_model::FieldCatalog;

/// Shared, immutable application state. The catalog is built once at
/// startup; request handlers only ever read it, so concurrent requests
/// need no coordination.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<FieldCatalog>,
}
