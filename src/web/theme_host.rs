use wingspay_core::{SiteError, SiteResult, ThemeHost};

use super::js_message;

/// `localStorage`, `matchMedia` and the `<html>` class list
pub struct WebThemeHost {
    window: web_sys::Window,
}

impl WebThemeHost {
    /// `None` outside a browser (no `window`)
    pub fn detect() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }

    fn storage(&self) -> SiteResult<web_sys::Storage> {
        self.window
            .local_storage()
            .map_err(|e| SiteError::Storage(js_message(&e)))?
            .ok_or_else(|| SiteError::Storage("localStorage unavailable".to_string()))
    }

    fn root(&self) -> SiteResult<web_sys::Element> {
        self.window
            .document()
            .and_then(|doc| doc.document_element())
            .ok_or_else(|| SiteError::Dom("document root unavailable".to_string()))
    }
}

impl ThemeHost for WebThemeHost {
    fn read_persisted(&self, key: &str) -> SiteResult<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| SiteError::Storage(js_message(&e)))
    }

    fn write_persisted(&self, key: &str, value: &str) -> SiteResult<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| SiteError::Storage(js_message(&e)))
    }

    fn prefers_dark(&self) -> Option<bool> {
        self.window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map(|query| query.matches())
    }

    fn remove_root_marker(&self, marker: &str) -> SiteResult<()> {
        self.root()?
            .class_list()
            .remove_1(marker)
            .map_err(|e| SiteError::Dom(js_message(&e)))
    }

    fn add_root_marker(&self, marker: &str) -> SiteResult<()> {
        self.root()?
            .class_list()
            .add_1(marker)
            .map_err(|e| SiteError::Dom(js_message(&e)))
    }
}
