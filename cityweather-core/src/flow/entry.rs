use crate::flow::Route;
use crate::session::Session;

pub const VALIDATION_MESSAGE: &str = "Please enter a city name.";

/// City entry screen: validates raw input and stages it for the results view.
///
/// No network access and no loading state; the only side effect of a
/// successful submission is one session write.
#[derive(Debug, Default)]
pub struct EntryView {
    error: Option<String>,
}

impl EntryView {
    /// Submit raw user input.
    ///
    /// Trims the input. Whitespace-only input sets a validation message and
    /// changes nothing else; otherwise the trimmed city is staged in the
    /// session and a transition to [`Route::Results`] is requested.
    pub fn submit(&mut self, raw_input: &str, session: &mut Session) -> Option<Route> {
        let trimmed = raw_input.trim();

        if trimmed.is_empty() {
            self.error = Some(VALIDATION_MESSAGE.to_string());
            return None;
        }

        self.error = None;
        session.set_city(trimmed);
        Some(Route::Results)
    }

    /// Current validation message, if the last submission was rejected.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
