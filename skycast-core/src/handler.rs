use tracing::debug;

use crate::client::WeatherClient;
use crate::location::LocationSource;
use crate::presenter::WeatherPresenter;
use crate::view::WeatherView;

/// One "search by city" action: validate input, fetch, present.
///
/// Empty or whitespace-only input is rejected before any network call.
/// All fetch failures collapse into a single user-facing message; the
/// underlying cause only reaches the diagnostic log.
pub async fn search_by_city<V: WeatherView>(
    client: &WeatherClient,
    presenter: &mut WeatherPresenter<V>,
    raw_input: &str,
) {
    let city = raw_input.trim();

    if city.is_empty() {
        presenter.display_error("Please enter a city name.");
        return;
    }

    match client.fetch_by_city(city).await {
        Ok(reading) => {
            debug!(city, observed_at = %reading.observed_at, "city search succeeded");
            presenter.display(&reading);
        }
        Err(err) => {
            debug!(city, error = %err, "city search failed");
            presenter.display_error("City not found! Please try again.");
        }
    }
}

/// One "search by location" action: capability check, position lookup,
/// fetch, present.
pub async fn search_by_location<V: WeatherView>(
    client: &WeatherClient,
    presenter: &mut WeatherPresenter<V>,
    source: &dyn LocationSource,
) {
    if !source.is_available() {
        presenter.display_error("Geolocation is not supported on this system.");
        return;
    }

    let position = match source.current_position().await {
        Ok(position) => position,
        Err(err) => {
            debug!(error = %err, "position lookup failed");
            presenter.display_error("Location access denied or unavailable.");
            return;
        }
    };

    match client
        .fetch_by_coordinates(position.latitude, position.longitude)
        .await
    {
        Ok(reading) => {
            debug!(
                latitude = position.latitude,
                longitude = position.longitude,
                observed_at = %reading.observed_at,
                "location search succeeded"
            );
            presenter.display(&reading);
        }
        Err(err) => {
            debug!(error = %err, "location search failed");
            presenter.display_error("Unable to fetch weather for your location.");
        }
    }
}
