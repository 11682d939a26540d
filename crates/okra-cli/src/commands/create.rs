use clap::Args;

use okra_core::types::{ObjectiveDraft, RoleId};

use crate::config;
use crate::output;

#[derive(Args)]
pub struct CreateArgs {
    /// Objective title
    #[arg(long)]
    title: String,
    #[arg(long, default_value = "")]
    description: String,
    /// Assignee role id
    #[arg(long)]
    assignee: String,
    /// Owner role id
    #[arg(long)]
    owner: String,
    /// Capital classification
    #[arg(long)]
    capital: String,
    /// Start date, YYYY-MM-DD
    #[arg(long)]
    start: String,
    /// Target date, YYYY-MM-DD, at least 30 days after start
    #[arg(long)]
    target: String,
    /// Reporting year (defaults to the configured or current year)
    #[arg(short, long)]
    year: Option<i32>,
    #[arg(long, default_value = "")]
    milestones: String,
    #[arg(long, default_value = "")]
    metrics: String,
}

pub async fn run(args: CreateArgs) -> anyhow::Result<()> {
    let config = config::load_config()?;
    let year = args.year.unwrap_or_else(|| config.default_year());

    let draft = ObjectiveDraft {
        title: args.title,
        description: args.description,
        milestones: args.milestones,
        metrics: args.metrics,
        assignee_id: RoleId::new(args.assignee),
        owner_id: RoleId::new(args.owner),
        capital: args.capital,
        start_date: args.start,
        target_date: args.target,
        year,
    };

    let mut repo = super::open_repository(&config);
    repo.load_initial().await?;

    let created = repo.create(draft).await?;
    println!("Objective {} created.", created.id);
    println!("{}", output::tile(&created));
    Ok(())
}
