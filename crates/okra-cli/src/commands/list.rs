use clap::Args;

use okra_core::paginate;
use okra_core::types::{ViewRole, ViewState};

use crate::config;
use crate::output;

#[derive(Args)]
pub struct ListArgs {
    /// Reporting year (defaults to the configured or current year)
    #[arg(short, long)]
    year: Option<i32>,
    /// View as Assignee or Owner
    #[arg(long, default_value = "assignee")]
    view_as: ViewRole,
    /// Show every objective for the year, ordered by assignee
    #[arg(long)]
    all: bool,
    /// Page number
    #[arg(short, long, default_value_t = 1)]
    page: usize,
    /// Discard the session cache and refetch from the server
    #[arg(long)]
    refresh: bool,
}

pub async fn run(args: ListArgs) -> anyhow::Result<()> {
    let config = config::load_config()?;

    let mut state = ViewState::new(args.year.unwrap_or_else(|| config.default_year()));
    state.set_view_as(args.view_as);
    if args.all {
        state.toggle_view_all();
    }
    state.page = args.page;

    let mut repo = super::open_repository(&config);
    if args.refresh {
        repo.refresh().await?;
    } else {
        repo.load_initial().await?;
    }

    let (label, objectives) = if state.viewing_all {
        ("all".to_string(), repo.list_all(state.year).await?)
    } else {
        let objectives = repo.list_mine(state.year, &mut state.view_as).await?;
        (format!("as {}", state.view_as), objectives)
    };

    if objectives.is_empty() {
        if state.viewing_all {
            println!("No objectives recorded for {}.", state.year);
        } else {
            println!(
                "You have no objectives for {} either as Assignee or as the Owner.",
                state.year
            );
        }
        return Ok(());
    }

    let page = paginate(&objectives, config.page_size, state.page);
    println!(
        "{}",
        output::header(&format!("objectives for {} ({label})", state.year))
    );
    for obj in &page.items {
        println!("{}", output::tile(obj));
    }
    println!("{}", output::page_footer(&page, objectives.len()));
    Ok(())
}
