//! Application state shared across handlers.

use safesender_core::Config;
use safesender_services::FilesService;
use tokio_util::sync::CancellationToken;

/// State handed to every handler via `State<Arc<AppState>>`.
///
/// The shutdown token is cancelled when the server begins graceful shutdown;
/// handlers thread it through the files service so in-flight store calls are
/// abandoned without committing partial state.
pub struct AppState {
    pub config: Config,
    pub files: FilesService,
    pub shutdown: CancellationToken,
}

impl AppState {
    pub fn new(config: Config, files: FilesService, shutdown: CancellationToken) -> Self {
        Self {
            config,
            files,
            shutdown,
        }
    }
}
