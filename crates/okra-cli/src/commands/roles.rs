use clap::Args;

use crate::config;
use crate::output;

#[derive(Args)]
pub struct RolesArgs {}

pub async fn run(_args: RolesArgs) -> anyhow::Result<()> {
    let config = config::load_config()?;
    let mut repo = super::open_repository(&config);

    let roles = repo.roles().await?;
    if roles.is_empty() {
        println!("No roles available.");
        return Ok(());
    }

    println!("{}", output::header("roles"));
    for role in roles {
        println!("{}", output::kv(role.id.as_str(), &role.name));
    }
    Ok(())
}
