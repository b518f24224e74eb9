/// Session-scoped state shared between the entry and results views.
///
/// Owned by the routing shell and handed to each view explicitly; it lives
/// for one run of the shell and is dropped when the session ends. The staged
/// city is always a non-empty, trimmed string: the entry view validates
/// before calling [`Session::set_city`], and the results view only reads.
#[derive(Debug, Default)]
pub struct Session {
    city: Option<String>,
}

impl Session {
    /// Stage a city name for the results view. Callers pass a trimmed,
    /// non-empty value.
    pub fn set_city(&mut self, city: &str) {
        debug_assert!(!city.trim().is_empty());
        self.city = Some(city.to_owned());
    }

    /// The pending city, if one has been staged this session.
    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }
}
