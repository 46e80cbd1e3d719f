/// The five text regions of the result panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    LocationName,
    Temperature,
    Condition,
    Humidity,
    WindSpeed,
}

impl Field {
    pub const fn all() -> &'static [Field] {
        &[
            Field::LocationName,
            Field::Temperature,
            Field::Condition,
            Field::Humidity,
            Field::WindSpeed,
        ]
    }
}

/// Output surface the presenter writes to.
///
/// Keeps presentation logic independent of any concrete page or terminal,
/// so it can be exercised against a recording fake.
pub trait WeatherView {
    /// Overwrite the text of one panel region.
    fn set_field(&mut self, field: Field, text: &str);

    /// Show or hide the result panel.
    fn set_panel_visible(&mut self, visible: bool);

    /// Surface an error message to the user. Must not touch the panel.
    fn show_error(&mut self, message: &str);
}
