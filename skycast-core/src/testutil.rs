//! Shared test doubles.

use std::collections::HashMap;

use crate::view::{Field, WeatherView};

/// In-memory view that records everything the presenter writes.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub fields: HashMap<Field, String>,
    pub panel_visible: bool,
    pub errors: Vec<String>,
}

impl WeatherView for RecordingView {
    fn set_field(&mut self, field: Field, text: &str) {
        self.fields.insert(field, text.to_string());
    }

    fn set_panel_visible(&mut self, visible: bool) {
        self.panel_visible = visible;
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}
