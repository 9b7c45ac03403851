//! Navigation controller binding
//!
//! The catalog layer only needs `navigate_to(path)`, fire-and-forget.

use leptos::prelude::*;
use web_sys::window;

pub trait Navigator {
    fn navigate_to(&self, path: &str);
}

/// Navigator over `history.pushState`; `path` drives which page is rendered
#[derive(Clone, Copy)]
pub struct HistoryNavigator {
    pub path: RwSignal<String>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self {
            path: RwSignal::new(current_path()),
        }
    }

    /// Follow back/forward buttons
    pub fn init_popstate_listener(&self) {
        let path = self.path;
        let _handle = window_event_listener(leptos::ev::popstate, move |_| {
            path.set(current_path());
        });
    }
}

impl Default for HistoryNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for HistoryNavigator {
    fn navigate_to(&self, path: &str) {
        log::debug!("navigate_to: {}", path);
        if let Some(w) = window() {
            if let Ok(history) = w.history() {
                if let Err(e) =
                    history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path))
                {
                    log::warn!("pushState to {} failed: {:?}", path, e);
                }
            }
        }
        self.path.set(path.to_string());
    }
}

fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}
