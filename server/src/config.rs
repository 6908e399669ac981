use anyhow::{Context, anyhow};
use rollcall_shared::{CurrentActor, Member, WorkspaceId};
use serde::Deserialize;
use std::{
    net::{Ipv4Addr, SocketAddr},
    path::Path,
    rc::Rc,
};

pub const CONFIG_PATH_ENV: &str = "ROLLCALL_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config.nix";

#[derive(Debug, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    /// The signed-in user served to the UI, with their resolved grants.
    pub actor: CurrentActor,
    #[serde(default)]
    pub workspaces: Vec<WorkspaceSeed>,
}

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,
}

#[derive(Debug, Deserialize)]
pub struct WorkspaceSeed {
    pub id: WorkspaceId,
    pub name: String,
    #[serde(default)]
    pub memberships: Vec<Member>,
}

fn default_bind() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::UNSPECIFIED, 3000))
}

impl Config {
    /// Path from `ROLLCALL_CONFIG`, or `config.nix` in the working directory.
    pub fn path_from_env() -> String {
        std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
    }

    pub async fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        tvix_serde::from_str_with_config(content, |eval| {
            eval.enable_import().io_handle(Rc::new(tvix_eval::StdIO))
        })
        .map_err(|e| anyhow!("failed to parse config: {e}"))
    }
}
