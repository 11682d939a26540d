use std::io::Write;

use anyhow::bail;
use clap::Args;

use okra_core::types::ObjectiveId;

use crate::config;

#[derive(Args)]
pub struct DeleteArgs {
    /// Objective id
    id: i64,
    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    yes: bool,
}

pub async fn run(args: DeleteArgs) -> anyhow::Result<()> {
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

    if !args.yes {
        print!("Delete objective \"{}\"? [y/N] ", existing.title);
        std::io::stdout().flush()?;
        let mut answer = String::new();
        std::io::stdin().read_line(&mut answer)?;
        if !answer.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    repo.remove(id).await?;
    println!("Objective {id} deleted.");
    Ok(())
}
