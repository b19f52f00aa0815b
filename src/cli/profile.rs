//! Profile command implementation

use log::debug;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::cli::context::is_interactive;
use crate::cli::handlers::load_with_retry;
use crate::client::ProfileApi;
use crate::client::models::Profile;
use crate::error::Result;
use crate::fetch::{FetchAdapter, FetchStatus};
use crate::output::Formattable;

/// Run the profile command
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let mut adapter: FetchAdapter<(), Profile> = FetchAdapter::new();

    debug!("Fetching profile");
    let (client, session) = (&ctx.client, &ctx.session);
    load_with_retry(&mut adapter, (), "Loading profile...", is_interactive(), |_| {
        client.get_profile(session)
    })
    .await?;

    if let Some(FetchStatus::Loaded(profile)) = adapter.status() {
        profile.print(ctx.format)?;
    }

    Ok(())
}
