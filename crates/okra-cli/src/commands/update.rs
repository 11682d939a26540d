use anyhow::bail;
use clap::Args;

use okra_core::types::{ObjectiveId, ObjectivePatch, ObjectiveStatus, Rag};
use okra_core::Month;

use crate::config;
use crate::output;

#[derive(Args)]
pub struct UpdateArgs {
    /// Objective id
    id: i64,
    /// New status: Open, "In Progress" or Closed
    #[arg(long)]
    status: Option<ObjectiveStatus>,
    /// New RAG: Red, Amber or Green
    #[arg(long)]
    rag: Option<Rag>,
    /// New start date, YYYY-MM-DD
    #[arg(long)]
    start: Option<String>,
    /// New target date, YYYY-MM-DD
    #[arg(long)]
    target: Option<String>,
    #[arg(long)]
    milestones: Option<String>,
    #[arg(long)]
    metrics: Option<String>,
    /// Progress note for one month
    #[arg(long)]
    note: Option<String>,
    /// Month the note belongs to (defaults to the current month)
    #[arg(long)]
    month: Option<Month>,
}

pub async fn run(args: UpdateArgs) -> anyhow::Result<()> {
    let config = config::load_config()?;
    let id = ObjectiveId(args.id);

    let mut repo = super::open_repository(&config);
    repo.load_initial().await?;

    let Some(existing) = repo.get(id).await? else {
        bail!("no objective with id {id}");
    };
    if !existing.editable_by(repo.user()) {
        bail!("you are neither the assignee nor the owner of objective {id}");
    }

    let mut patch = ObjectivePatch {
        status: args.status,
        rag: args.rag,
        start_date: args.start,
        target_date: args.target,
        milestones: args.milestones,
        metrics: args.metrics,
        ..Default::default()
    };
    let noted_month = if let Some(note) = args.note {
        let month = args.month.unwrap_or_else(Month::current);
        patch.monthly_updates.insert(month, note);
        Some(month)
    } else {
        None
    };

    let updated = repo.update(id, patch).await?;
    println!("Objective {id} updated.");
    if let Some(month) = noted_month {
        println!("{} note recorded.", month.full_name());
    }
    println!("{}", output::tile(&updated));
    Ok(())
}
