use crate::flow::Route;
use crate::model::WeatherReading;
use crate::provider::WeatherProvider;
use crate::session::Session;

/// Where the results screen is in its activation lifecycle.
#[derive(Debug)]
pub enum ResultState {
    /// No city was staged; the view is bouncing back to the entry screen.
    Redirecting,
    /// The fetch is in flight (also the state of a freshly built view).
    Loading,
    Success(WeatherReading),
    /// Terminal for this activation; holds the user-facing message.
    Error(String),
}

/// Weather results screen.
///
/// The shell builds a fresh view and calls [`ResultView::activate`] once per
/// navigation into the results route, so coming back always re-reads the
/// session and re-fetches rather than reusing a prior reading.
#[derive(Debug)]
pub struct ResultView {
    state: ResultState,
}

impl Default for ResultView {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultView {
    #[must_use]
    pub fn new() -> Self {
        Self { state: ResultState::Loading }
    }

    /// Run the activation sequence: read the staged city, redirect if there
    /// is none, otherwise perform exactly one fetch and land in `Success` or
    /// `Error`.
    ///
    /// State is only written after the awaited fetch resolves, so dropping
    /// this future on deactivation discards the in-flight result instead of
    /// updating a view that is no longer shown.
    pub async fn activate(
        &mut self,
        session: &Session,
        provider: &dyn WeatherProvider,
    ) -> Option<Route> {
        let Some(city) = session.city() else {
            self.state = ResultState::Redirecting;
            return Some(Route::Entry);
        };

        self.state = ResultState::Loading;
        tracing::debug!(city, "results view activated");

        match provider.current_weather(city).await {
            Ok(reading) => self.state = ResultState::Success(reading),
            Err(err) => {
                tracing::warn!(city, error = %err, "weather lookup failed");
                self.state = ResultState::Error(err.user_message().to_string());
            }
        }

        None
    }

    /// Manual back-navigation; valid in any state.
    #[must_use]
    pub fn go_back(&self) -> Route {
        Route::Entry
    }

    #[must_use]
    pub fn state(&self) -> &ResultState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ProviderError;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::future::Future;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::task::{Context, Waker};

    fn reading() -> WeatherReading {
        WeatherReading {
            location_name: "London".to_string(),
            country: "GB".to_string(),
            condition: "Clouds".to_string(),
            description: "scattered clouds".to_string(),
            temperature_c: 20.0,
            humidity_pct: 81,
            wind_speed_mps: 4.1,
            observation_time: Utc::now(),
        }
    }

    fn staged_session(city: &str) -> Session {
        let mut session = Session::default();
        session.set_city(city);
        session
    }

    #[derive(Debug)]
    struct FakeProvider {
        outcome: Result<WeatherReading, ProviderError>,
        calls: AtomicUsize,
    }

    impl FakeProvider {
        fn with(outcome: Result<WeatherReading, ProviderError>) -> Self {
            Self { outcome, calls: AtomicUsize::new(0) }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl WeatherProvider for FakeProvider {
        async fn current_weather(&self, _city: &str) -> Result<WeatherReading, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone()
        }
    }

    /// Never resolves; stands in for a fetch still in flight.
    #[derive(Debug)]
    struct StalledProvider;

    #[async_trait]
    impl WeatherProvider for StalledProvider {
        async fn current_weather(&self, _city: &str) -> Result<WeatherReading, ProviderError> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn empty_session_redirects_without_fetching() {
        let mut view = ResultView::new();
        let session = Session::default();
        let provider = FakeProvider::with(Ok(reading()));

        let transition = view.activate(&session, &provider).await;

        assert_eq!(transition, Some(Route::Entry));
        assert!(matches!(view.state(), ResultState::Redirecting));
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn successful_fetch_lands_in_success() {
        let mut view = ResultView::new();
        let session = staged_session("London");
        let provider = FakeProvider::with(Ok(reading()));

        let transition = view.activate(&session, &provider).await;

        assert_eq!(transition, None);
        let ResultState::Success(shown) = view.state() else {
            panic!("expected Success, got {:?}", view.state());
        };
        assert_eq!(shown.location_name, "London");
        assert_eq!(shown.display_temperatures().fahrenheit, 68.0);
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn provider_errors_map_to_their_user_messages() {
        let cases = [
            (ProviderError::NotFound, "City not found! Try another city."),
            (ProviderError::Unauthorized, "Invalid API key."),
            (
                ProviderError::Unreachable("connection refused".to_string()),
                "Failed to fetch weather data. Try again later.",
            ),
            (
                ProviderError::Unknown("status 500".to_string()),
                "Failed to fetch weather data. Try again later.",
            ),
        ];

        for (err, expected) in cases {
            let mut view = ResultView::new();
            let session = staged_session("London");
            let provider = FakeProvider::with(Err(err));

            view.activate(&session, &provider).await;

            let ResultState::Error(msg) = view.state() else {
                panic!("expected Error, got {:?}", view.state());
            };
            assert_eq!(msg, expected);
        }
    }

    #[tokio::test]
    async fn reactivation_rereads_the_session_and_refetches() {
        let mut view = ResultView::new();
        let provider = FakeProvider::with(Ok(reading()));

        view.activate(&staged_session("London"), &provider).await;
        view.activate(&staged_session("Kyiv"), &provider).await;

        assert_eq!(provider.calls(), 2);
        assert!(matches!(view.state(), ResultState::Success(_)));
    }

    #[tokio::test]
    async fn activation_clears_a_previous_error() {
        let mut view = ResultView::new();
        let session = staged_session("London");

        view.activate(&session, &FakeProvider::with(Err(ProviderError::NotFound))).await;
        assert!(matches!(view.state(), ResultState::Error(_)));

        view.activate(&session, &FakeProvider::with(Ok(reading()))).await;
        assert!(matches!(view.state(), ResultState::Success(_)));
    }

    #[tokio::test]
    async fn go_back_requests_entry_from_any_state() {
        let session = staged_session("London");

        let loading = ResultView::new();
        assert_eq!(loading.go_back(), Route::Entry);

        let mut success = ResultView::new();
        success.activate(&session, &FakeProvider::with(Ok(reading()))).await;
        assert_eq!(success.go_back(), Route::Entry);

        let mut failed = ResultView::new();
        failed.activate(&session, &FakeProvider::with(Err(ProviderError::NotFound))).await;
        assert_eq!(failed.go_back(), Route::Entry);
    }

    #[test]
    fn dropped_activation_discards_the_in_flight_fetch() {
        let mut view = ResultView::new();
        let session = staged_session("London");
        let provider = StalledProvider;

        {
            let mut activation = Box::pin(view.activate(&session, &provider));
            let mut cx = Context::from_waker(Waker::noop());
            assert!(activation.as_mut().poll(&mut cx).is_pending());
            // Deactivation: the future is dropped mid-fetch.
        }

        assert!(matches!(view.state(), ResultState::Loading));
    }
}
