//! Console implementations of the engine's capability traits.
//!
//! The CLI has no browser to navigate or speakers to drive, so side
//! effects and speech are rendered as lines on stdout. These doubles
//! are also what the integration tests observe.

use folio_core::host::{Host, Theme, View};
use folio_core::speech::Synthesizer;

/// Prints every side effect the dispatcher invokes and tracks the
/// toggle state the settings rules flip.
pub struct ConsoleHost {
    theme: Theme,
    locale: String,
}

impl ConsoleHost {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            theme: Theme::Dark,
            locale: locale.into(),
        }
    }
}

impl Host for ConsoleHost {
    fn set_active_view(&mut self, view: View) {
        println!("-> view: {view}");
    }

    fn trigger_download(&mut self, url: &str) {
        println!("-> download: {url}");
    }

    fn open_external(&mut self, url: &str) {
        println!("-> open: {url}");
    }

    fn open_mailto(&mut self, address: &str) {
        println!("-> mailto: {address}");
    }

    fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        println!("-> theme: {}", self.theme);
        self.theme
    }

    fn toggle_language(&mut self) -> String {
        self.locale = if self.locale == "ml-IN" {
            "en-US".to_string()
        } else {
            "ml-IN".to_string()
        };
        println!("-> language: {}", self.locale);
        self.locale.clone()
    }
}

/// Renders spoken responses as stdout lines.
#[derive(Default)]
pub struct ConsoleSynthesizer;

impl Synthesizer for ConsoleSynthesizer {
    fn speak(&mut self, text: &str, locale: &str) {
        println!("(speaking, {locale}) {text}");
    }

    fn cancel(&mut self) {}
}
