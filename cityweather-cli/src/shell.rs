//! Routing shell: owns the session and the current route, shows one screen
//! per loop iteration, and applies whatever transition the active view
//! requests.

use anyhow::Result;
use cityweather_core::provider::provider_from_config;
use cityweather_core::{Config, EntryView, ResultView, Route, Session, WeatherProvider};
use inquire::{Confirm, Text};

use crate::render;

pub async fn run(config: &Config) -> Result<()> {
    let provider = provider_from_config(config)?;
    drive(&provider).await
}

async fn drive(provider: &dyn WeatherProvider) -> Result<()> {
    let mut session = Session::default();
    let mut entry = EntryView::default();
    let mut route = Route::Entry;

    loop {
        match route {
            Route::Entry => {
                if let Some(message) = entry.error() {
                    println!("{message}");
                }

                let raw = Text::new("City name:").prompt()?;
                if let Some(next) = entry.submit(&raw, &mut session) {
                    tracing::debug!(?next, "navigating");
                    route = next;
                }
            }
            Route::Results => {
                // Fresh view per activation, so navigating back in re-reads
                // the session and re-fetches instead of reusing a reading.
                let mut view = ResultView::new();

                if session.city().is_some() {
                    print!("{}", render::result_screen(view.state()));
                }

                if let Some(next) = view.activate(&session, provider).await {
                    route = next;
                    continue;
                }

                print!("{}", render::result_screen(view.state()));

                if Confirm::new("Look up another city?").with_default(true).prompt()? {
                    route = view.go_back();
                } else {
                    return Ok(());
                }
            }
        }
    }
}
