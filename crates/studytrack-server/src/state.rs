//! Server state shared across requests.

use std::sync::Arc;

use studytrack_auth::{CredentialAuth, UserStore};
use studytrack_config::Config;
use studytrack_resources::ResourceClient;
use studytrack_store::MarkStore;

/// Shared application state for all requests.
///
/// Backends are trait objects so the in-memory and SQL stores are
/// interchangeable (the `memory` database URL selects the former).
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<CredentialAuth<Arc<dyn UserStore>>>,
    pub marks: Arc<dyn MarkStore>,
    pub resources: Arc<ResourceClient>,
    pub config: Arc<Config>,
}
