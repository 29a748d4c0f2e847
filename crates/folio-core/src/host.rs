//! Outward side-effect surface of the dispatcher.
//!
//! Dispatched intents never perform navigation, downloads, or
//! settings mutation themselves; they call into a [`Host`]
//! implementation supplied by the embedding application. The engine
//! treats these as opaque callbacks.

use std::fmt;

/// The navigable views of the hosting application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    About,
    Projects,
    Skills,
    Experience,
    Achievements,
    Certifications,
    Recommendations,
    Blog,
    Contact,
    Settings,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::About => "about",
            View::Projects => "projects",
            View::Skills => "skills",
            View::Experience => "experience",
            View::Achievements => "achievements",
            View::Certifications => "certifications",
            View::Recommendations => "recommendations",
            View::Blog => "blog",
            View::Contact => "contact",
            View::Settings => "settings",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color theme of the hosting application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        })
    }
}

/// Side-effect callbacks the dispatcher invokes. Implemented by each
/// front-end (a browser shell, the CLI, a test double).
pub trait Host {
    /// Switch the application to the given view.
    fn set_active_view(&mut self, view: View);

    /// Trigger a client-side file download.
    fn trigger_download(&mut self, url: &str);

    /// Open an external link (new tab / `window.open` equivalent).
    fn open_external(&mut self, url: &str);

    /// Open the visitor's mail client addressed to `address`.
    fn open_mailto(&mut self, address: &str);

    /// Flip the color theme, returning the new state so the response
    /// can name it.
    fn toggle_theme(&mut self) -> Theme;

    /// Flip the interface language, returning the new locale tag.
    fn toggle_language(&mut self) -> String;
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Records every host call for assertions.
    #[derive(Default)]
    pub struct RecordingHost {
        pub views: Vec<View>,
        pub downloads: Vec<String>,
        pub external: Vec<String>,
        pub mailto: Vec<String>,
        pub theme: Option<Theme>,
        pub locale: String,
    }

    impl Host for RecordingHost {
        fn set_active_view(&mut self, view: View) {
            self.views.push(view);
        }

        fn trigger_download(&mut self, url: &str) {
            self.downloads.push(url.to_string());
        }

        fn open_external(&mut self, url: &str) {
            self.external.push(url.to_string());
        }

        fn open_mailto(&mut self, address: &str) {
            self.mailto.push(address.to_string());
        }

        fn toggle_theme(&mut self) -> Theme {
            let next = self.theme.unwrap_or(Theme::Dark).toggled();
            self.theme = Some(next);
            next
        }

        fn toggle_language(&mut self) -> String {
            self.locale = if self.locale == "ml-IN" {
                "en-US".to_string()
            } else {
                "ml-IN".to_string()
            };
            self.locale.clone()
        }
    }
}
