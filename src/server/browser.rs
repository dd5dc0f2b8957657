// Browser launch
// Headless machines and SSH sessions have nothing to open; that is a
// warning, not a failure.

use crate::logger;

/// Try to open `url` in the local default browser.
pub fn open_in_browser(url: &str) {
    if let Err(e) = open::that(url) {
        logger::log_warning(&format!(
            "Could not open a browser for {url}: {e}. Navigate there manually."
        ));
    }
}
