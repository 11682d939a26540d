pub mod create;
pub mod delete;
pub mod list;
pub mod roles;
pub mod update;

use clap::Subcommand;

use okra_api::HttpApiClient;
use okra_client::ObjectiveRepository;
use okra_core::types::RoleId;
use okra_store::MemorySessionStore;

use crate::config::CliConfig;

#[derive(Subcommand)]
pub enum Commands {
    /// List objectives for a year
    List(list::ListArgs),
    /// Submit a new objective
    Create(create::CreateArgs),
    /// Update an objective's status, dates or monthly note
    Update(update::UpdateArgs),
    /// Delete an objective
    Delete(delete::DeleteArgs),
    /// List the people objectives can be assigned to
    Roles(roles::RolesArgs),
}

impl Commands {
    pub async fn run(self) -> anyhow::Result<()> {
        match self {
            Commands::List(args) => list::run(args).await,
            Commands::Create(args) => create::run(args).await,
            Commands::Update(args) => update::run(args).await,
            Commands::Delete(args) => delete::run(args).await,
            Commands::Roles(args) => roles::run(args).await,
        }
    }
}

pub(crate) type CliRepository = ObjectiveRepository<MemorySessionStore, HttpApiClient>;

pub(crate) fn open_repository(config: &CliConfig) -> CliRepository {
    ObjectiveRepository::new(
        MemorySessionStore::new(),
        HttpApiClient::new(config.api_base_url.clone()),
        RoleId::new(config.user_id.clone()),
    )
}
