//! Job listing command

use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::context::is_interactive;
use crate::cli::handlers::load_with_retry;
use crate::cli::{CommandContext, JobFilterArgs, OutputFormat};
use crate::client::models::Job;
use crate::client::{JobQuery, JobsApi};
use crate::error::Result;
use crate::fetch::{FetchAdapter, View};
use crate::output::{Formattable, views};

/// Run the jobs list command
pub async fn list(opts: &GlobalOptions, args: &JobFilterArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let intent = args.to_filters().refetch();
    debug!("Listing jobs with {:?}", intent.query);

    let mut adapter: FetchAdapter<JobQuery, Vec<Job>> = FetchAdapter::new();
    let (client, session) = (&ctx.client, &ctx.session);
    load_with_retry(
        &mut adapter,
        intent.query,
        "Loading jobs...",
        is_interactive(),
        |query| async move { client.list_jobs(session, &query).await },
    )
    .await?;

    println!("{}", render_jobs(adapter.view(), ctx.format)?);
    Ok(())
}

/// Render the jobs panel for the current fetch state.
pub fn render_jobs(view: View<'_, Vec<Job>>, format: OutputFormat) -> Result<String> {
    match view {
        View::Idle | View::Loading => Ok(String::new()),
        View::Empty => Vec::<Job>::new().format(format),
        View::Ready(jobs) => jobs.format(format),
        View::Failure { detail, .. } => Ok(views::failure(detail)),
    }
}
