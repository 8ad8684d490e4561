//! Default-browser launch

use crate::errors::ServeError;

/// Opens a URL in the operator's browser. Tests substitute a recorder.
pub trait BrowserLauncher {
    fn open(&self, url: &str) -> Result<(), ServeError>;
}

/// Launcher backed by the platform's default URL handler.
pub struct SystemBrowser;

impl BrowserLauncher for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), ServeError> {
        open::that(url).map_err(|e| ServeError::Browser(e.to_string()))
    }
}
