//! Interactive jobs view
//!
//! Shows the profile card and the job list side by side (stacked, in a
//! terminal) and loops over a menu of filter actions. Each action is applied
//! to [`JobFilters`]; the resulting [`Dispatch`] decides which fetch, if any,
//! runs next.

use colored::Colorize;
use dialoguer::{Input, MultiSelect, Select, theme::ColorfulTheme};
use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::context::is_interactive;
use crate::cli::handlers::load;
use crate::cli::jobs::render_jobs;
use crate::cli::{CommandContext, JobFilterArgs, OutputFormat};
use crate::client::models::{Job, Profile};
use crate::client::{JobQuery, JobsApi, ProfileApi};
use crate::error::{Error, Result};
use crate::fetch::{FetchAdapter, View};
use crate::filters::{EmploymentType, JobFilters, Refetch, SalaryRange};
use crate::models::display::profile_card;
use crate::output::views;
use crate::session::Session;

/// A menu choice
#[derive(Debug, Clone, PartialEq)]
pub enum BrowseAction {
    Search(String),
    EmploymentTypes(Vec<EmploymentType>),
    SalaryRange(SalaryRange),
    RetryJobs,
    RetryProfile,
    Quit,
}

/// What to fetch after an action
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
    Jobs(Refetch),
    RetryJobs,
    RetryProfile,
    Nothing,
    Quit,
}

/// Apply a menu action to the filter state.
pub fn apply_action(filters: &mut JobFilters, action: BrowseAction) -> Dispatch {
    let intent = match action {
        BrowseAction::Search(text) => {
            filters.set_search_text(text);
            Some(filters.submit_search())
        }
        BrowseAction::EmploymentTypes(selection) => filters.set_employment_types(&selection),
        BrowseAction::SalaryRange(range) => filters.set_salary_range(range),
        BrowseAction::RetryJobs => return Dispatch::RetryJobs,
        BrowseAction::RetryProfile => return Dispatch::RetryProfile,
        BrowseAction::Quit => return Dispatch::Quit,
    };
    intent.map_or(Dispatch::Nothing, Dispatch::Jobs)
}

/// Run the jobs browse command
pub async fn run(opts: &GlobalOptions, args: &JobFilterArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    if !is_interactive() {
        return Err(Error::Other(
            "`jobby jobs browse` needs a terminal; use `jobby jobs list` instead".to_string(),
        ));
    }

    let (client, session) = (&ctx.client, &ctx.session);
    let mut filters = args.to_filters();

    let spinner = views::loading("Loading...");
    let Dashboard {
        mut jobs,
        mut profile,
    } = load_dashboard(client, session, &filters).await;
    spinner.finish_and_clear();

    loop {
        render_screen(&filters, &profile, &jobs)?;

        let action = prompt_action(&filters, jobs.is_failed(), profile.is_failed())?;
        match apply_action(&mut filters, action) {
            Dispatch::Quit => return Ok(()),
            Dispatch::Nothing => debug!("Filters unchanged"),
            Dispatch::Jobs(intent) => {
                let ticket = jobs.dispatch(intent.query);
                load(&mut jobs, ticket, "Loading jobs...", |query| async move {
                    client.list_jobs(session, &query).await
                })
                .await;
            }
            Dispatch::RetryJobs => {
                if let Some(ticket) = jobs.retry() {
                    load(&mut jobs, ticket, "Loading jobs...", |query| async move {
                        client.list_jobs(session, &query).await
                    })
                    .await;
                }
            }
            Dispatch::RetryProfile => {
                if let Some(ticket) = profile.retry() {
                    load(&mut profile, ticket, "Loading profile...", |_| {
                        client.get_profile(session)
                    })
                    .await;
                }
            }
        }
    }
}

/// Fetch state behind the browse screen
pub struct Dashboard {
    pub jobs: FetchAdapter<JobQuery, Vec<Job>>,
    pub profile: FetchAdapter<(), Profile>,
}

/// Load the profile card and the first job listing concurrently.
pub async fn load_dashboard<C>(client: &C, session: &Session, filters: &JobFilters) -> Dashboard
where
    C: JobsApi + ProfileApi + ?Sized,
{
    let mut jobs = FetchAdapter::new();
    let mut profile = FetchAdapter::new();

    let jobs_ticket = jobs.dispatch(filters.refetch().query);
    let profile_ticket = profile.dispatch(());
    tokio::join!(
        jobs.execute(jobs_ticket, |query| async move {
            client.list_jobs(session, &query).await
        }),
        profile.execute(profile_ticket, |_| client.get_profile(session)),
    );

    Dashboard { jobs, profile }
}

fn render_screen(
    filters: &JobFilters,
    profile: &FetchAdapter<(), Profile>,
    jobs: &FetchAdapter<JobQuery, Vec<Job>>,
) -> Result<()> {
    println!();
    match profile.view() {
        View::Ready(p) => println!("{}", profile_card(p)),
        View::Failure { .. } => println!("{}", "Profile unavailable (choose Retry profile)".red()),
        _ => {}
    }

    println!("\n{}", filter_summary(filters).dimmed());
    println!("\n{}", render_jobs(jobs.view(), OutputFormat::Pretty)?);
    Ok(())
}

/// One-line description of the active filters
pub fn filter_summary(filters: &JobFilters) -> String {
    let types = if filters.employment_types().is_empty() {
        "any type".to_string()
    } else {
        filters
            .employment_types()
            .iter()
            .map(|t| t.label())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let salary = filters
        .salary_range()
        .map_or("any salary", |r| r.label());
    let search = if filters.search_text().is_empty() {
        "no search".to_string()
    } else {
        format!("search \"{}\"", filters.search_text())
    };
    format!("Filters: {} | {} | {}", types, salary, search)
}

fn prompt_action(
    filters: &JobFilters,
    jobs_failed: bool,
    profile_failed: bool,
) -> Result<BrowseAction> {
    #[derive(Clone, Copy)]
    enum Item {
        Search,
        Types,
        Salary,
        RetryJobs,
        RetryProfile,
        Quit,
    }

    let mut items = vec![
        (Item::Search, "Search"),
        (Item::Types, "Employment type"),
        (Item::Salary, "Salary range"),
    ];
    if jobs_failed {
        items.push((Item::RetryJobs, "Retry jobs"));
    }
    if profile_failed {
        items.push((Item::RetryProfile, "Retry profile"));
    }
    items.push((Item::Quit, "Quit"));

    let theme = ColorfulTheme::default();
    let labels: Vec<&str> = items.iter().map(|(_, label)| *label).collect();
    let choice = Select::with_theme(&theme)
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact_opt()?;

    let Some(index) = choice else {
        return Ok(BrowseAction::Quit);
    };

    Ok(match items[index].0 {
        Item::Search => BrowseAction::Search(
            Input::<String>::with_theme(&theme)
                .with_prompt("Search")
                .with_initial_text(filters.search_text())
                .allow_empty(true)
                .interact_text()?,
        ),
        Item::Types => {
            let labels: Vec<&str> = EmploymentType::ALL.iter().map(|t| t.label()).collect();
            let checked: Vec<bool> = EmploymentType::ALL
                .iter()
                .map(|t| filters.employment_types().contains(t))
                .collect();
            let picked = MultiSelect::with_theme(&theme)
                .with_prompt("Type of employment (space to toggle)")
                .items(&labels)
                .defaults(&checked)
                .interact()?;
            BrowseAction::EmploymentTypes(
                picked.into_iter().map(|i| EmploymentType::ALL[i]).collect(),
            )
        }
        Item::Salary => {
            let labels: Vec<&str> = SalaryRange::ALL.iter().map(|r| r.label()).collect();
            let current = filters
                .salary_range()
                .and_then(|r| SalaryRange::ALL.iter().position(|x| *x == r))
                .unwrap_or(0);
            let picked = Select::with_theme(&theme)
                .with_prompt("Salary range")
                .items(&labels)
                .default(current)
                .interact()?;
            BrowseAction::SalaryRange(SalaryRange::ALL[picked])
        }
        Item::RetryJobs => BrowseAction::RetryJobs,
        Item::RetryProfile => BrowseAction::RetryProfile,
        Item::Quit => BrowseAction::Quit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockJobbyClient;
    use crate::error::{ApiError, FailureKind};

    #[test]
    fn test_search_always_refetches() {
        let mut filters = JobFilters::new();
        let first = apply_action(&mut filters, BrowseAction::Search("go".to_string()));
        let second = apply_action(&mut filters, BrowseAction::Search("go".to_string()));

        assert_eq!(first, second);
        match first {
            Dispatch::Jobs(intent) => assert_eq!(intent.query.search, "go"),
            other => panic!("expected refetch, got {:?}", other),
        }
    }

    #[test]
    fn test_unchanged_selection_dispatches_nothing() {
        let mut filters = JobFilters::new();
        let dispatch = apply_action(&mut filters, BrowseAction::EmploymentTypes(Vec::new()));
        assert_eq!(dispatch, Dispatch::Nothing);

        apply_action(&mut filters, BrowseAction::SalaryRange(SalaryRange::Lpa20));
        let dispatch = apply_action(&mut filters, BrowseAction::SalaryRange(SalaryRange::Lpa20));
        assert_eq!(dispatch, Dispatch::Nothing);
    }

    #[test]
    fn test_salary_change_refetches_with_all_constraints() {
        let mut filters = JobFilters::new();
        apply_action(
            &mut filters,
            BrowseAction::EmploymentTypes(vec![EmploymentType::Internship]),
        );
        let dispatch = apply_action(&mut filters, BrowseAction::SalaryRange(SalaryRange::Lpa10));

        match dispatch {
            Dispatch::Jobs(intent) => {
                assert_eq!(intent.query.employment_type_segment(), "INTERNSHIP");
                assert_eq!(intent.query.minimum_package.as_deref(), Some("1000000"));
            }
            other => panic!("expected refetch, got {:?}", other),
        }
    }

    #[test]
    fn test_control_actions() {
        let mut filters = JobFilters::new();
        assert_eq!(apply_action(&mut filters, BrowseAction::RetryJobs), Dispatch::RetryJobs);
        assert_eq!(
            apply_action(&mut filters, BrowseAction::RetryProfile),
            Dispatch::RetryProfile
        );
        assert_eq!(apply_action(&mut filters, BrowseAction::Quit), Dispatch::Quit);
    }

    #[test]
    fn test_filter_summary() {
        let mut filters = JobFilters::new();
        assert_eq!(
            filter_summary(&filters),
            "Filters: any type | any salary | no search"
        );

        filters.toggle_employment_type(EmploymentType::FullTime, true);
        filters.toggle_employment_type(EmploymentType::Freelance, true);
        filters.set_salary_range(SalaryRange::Lpa30);
        filters.set_search_text("rust");
        assert_eq!(
            filter_summary(&filters),
            "Filters: Full Time, Freelance | 30 LPA and above | search \"rust\""
        );
    }

    #[tokio::test]
    async fn test_dispatch_flow_against_mock() {
        let mock = MockJobbyClient::new();
        let session = Session::new("t");
        let mut filters = JobFilters::new();
        let mut jobs: FetchAdapter<JobQuery, Vec<Job>> = FetchAdapter::new();
        let (client, session) = (&mock, &session);

        mock.fail_next(ApiError::Network("refused".to_string())).await;
        let Dispatch::Jobs(intent) = apply_action(
            &mut filters,
            BrowseAction::EmploymentTypes(vec![EmploymentType::PartTime]),
        ) else {
            panic!("expected refetch");
        };
        let ticket = jobs.dispatch(intent.query);
        jobs.execute(ticket, |q| async move { client.list_jobs(session, &q).await })
            .await;
        assert!(jobs.is_failed());

        assert_eq!(apply_action(&mut filters, BrowseAction::RetryJobs), Dispatch::RetryJobs);
        let ticket = jobs.retry().unwrap();
        jobs.execute(ticket, |q| async move { client.list_jobs(session, &q).await })
            .await;
        assert_eq!(jobs.view(), View::Empty);

        let captured = mock.captured_requests().await;
        assert_eq!(captured.len(), 2);
        assert_eq!(captured[0].query, captured[1].query);
        assert_eq!(
            captured[1].query.as_ref().unwrap().employment_type_segment(),
            "PARTTIME"
        );
    }

    #[tokio::test]
    async fn test_dashboard_loads_both_panels_independently() {
        let mock = MockJobbyClient::new().with_jobs(Vec::new());
        let session = Session::new("token-xyz");
        let mut filters = JobFilters::new();
        filters.toggle_employment_type(EmploymentType::Freelance, true);

        let dashboard = load_dashboard(&mock, &session, &filters).await;

        assert_eq!(dashboard.jobs.view(), View::Empty);
        assert!(matches!(
            dashboard.profile.view(),
            View::Failure {
                kind: FailureKind::NetworkOrServer,
                ..
            }
        ));

        let counts = mock.call_counts().await;
        assert_eq!(counts.list_jobs, 1);
        assert_eq!(counts.get_profile, 1);

        let captured = mock.captured_requests().await;
        let jobs_call = captured
            .iter()
            .find(|c| c.method == "list_jobs")
            .unwrap();
        assert_eq!(jobs_call.token.as_deref(), Some("token-xyz"));
        assert_eq!(
            jobs_call.query.as_ref().unwrap().employment_type_segment(),
            "FREELANCE"
        );
    }
}
