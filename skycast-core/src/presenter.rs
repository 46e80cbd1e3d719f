use tracing::error;

use crate::model::{Units, WeatherReading};
use crate::view::{Field, WeatherView};

/// Projects a `WeatherReading` onto the five panel regions of a view.
#[derive(Debug)]
pub struct WeatherPresenter<V> {
    view: V,
    units: Units,
}

impl<V: WeatherView> WeatherPresenter<V> {
    pub fn new(view: V, units: Units) -> Self {
        Self { view, units }
    }

    /// Reveal the result panel and overwrite all five regions.
    ///
    /// Idempotent; a later call with a different reading replaces every
    /// region, leaving nothing of the previous one.
    pub fn display(&mut self, reading: &WeatherReading) {
        self.view.set_panel_visible(true);
        self.view.set_field(Field::LocationName, &reading.name);
        self.view.set_field(
            Field::Temperature,
            &format!(
                "Temperature: {}{}",
                reading.temperature,
                self.units.temperature_suffix()
            ),
        );
        self.view
            .set_field(Field::Condition, &format!("Condition: {}", reading.condition));
        self.view
            .set_field(Field::Humidity, &format!("Humidity: {}%", reading.humidity));
        self.view.set_field(
            Field::WindSpeed,
            &format!(
                "Wind Speed: {} {}",
                reading.wind_speed,
                self.units.wind_speed_suffix()
            ),
        );
    }

    /// Surface an error without disturbing whatever the panel already shows.
    pub fn display_error(&mut self, message: &str) {
        error!(%message, "weather lookup failed");
        self.view.show_error(message);
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}
