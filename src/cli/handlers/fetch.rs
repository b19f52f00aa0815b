//! Fetch-and-render helpers
//!
//! Wraps a [`FetchAdapter`] run with a spinner, and for one-shot commands
//! offers the failure view's Retry prompt.

use std::future::Future;

use dialoguer::{Confirm, theme::ColorfulTheme};
use log::debug;

use crate::error::{Error, Result};
use crate::fetch::{FetchAdapter, FetchStatus, Ticket};
use crate::output::views;

/// Run one ticket to completion behind a spinner.
///
/// Returns `false` if the response was superseded.
pub async fn load<R, T, F, Fut>(
    adapter: &mut FetchAdapter<R, T>,
    ticket: Ticket<R>,
    message: &str,
    fetch: F,
) -> bool
where
    R: Clone,
    F: FnOnce(R) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let spinner = views::loading(message);
    let accepted = adapter.execute(ticket, fetch).await;
    spinner.finish_and_clear();
    accepted
}

/// Dispatch `request` and keep retrying on failure while the user agrees.
///
/// Without a terminal the failure view is printed and the error returned.
pub async fn load_with_retry<R, T, F, Fut>(
    adapter: &mut FetchAdapter<R, T>,
    request: R,
    message: &str,
    interactive: bool,
    fetch: F,
) -> Result<()>
where
    R: Clone,
    F: Fn(R) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut ticket = adapter.dispatch(request);
    loop {
        load(adapter, ticket, message, &fetch).await;

        let detail = match adapter.status() {
            Some(FetchStatus::Failed { detail, .. }) => detail.clone(),
            _ => return Ok(()),
        };

        eprintln!("{}", views::failure(&detail));
        if !interactive || !prompt_retry()? {
            return Err(Error::Other("Request failed".to_string()));
        }

        debug!("Retrying last request");
        ticket = adapter
            .retry()
            .ok_or_else(|| Error::Other("Nothing to retry".to_string()))?;
    }
}

fn prompt_retry() -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Retry?")
        .default(true)
        .interact()?)
}
