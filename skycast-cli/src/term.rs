use skycast_core::{Field, WeatherView};

/// Terminal rendition of the result panel.
///
/// Revealing the panel prints a header once; each field write prints one
/// line under it. Errors go to stderr.
#[derive(Debug, Default)]
pub struct TerminalView {
    panel_visible: bool,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WeatherView for TerminalView {
    fn set_field(&mut self, _field: Field, text: &str) {
        println!("  {text}");
    }

    fn set_panel_visible(&mut self, visible: bool) {
        if visible && !self.panel_visible {
            println!("Current weather");
            println!("---------------");
        }
        self.panel_visible = visible;
    }

    fn show_error(&mut self, message: &str) {
        eprintln!("{message}");
    }
}
