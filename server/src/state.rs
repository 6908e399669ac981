use crate::config::WorkspaceSeed;
use crate::workspace::Workspace;
use rollcall_shared::{CurrentActor, WorkspaceId};
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;

pub type Workspaces = Arc<RwLock<HashMap<WorkspaceId, Workspace>>>;

#[derive(Clone)]
pub struct AppState {
    pub workspaces: Workspaces,
    pub actor: Arc<CurrentActor>,
}

impl AppState {
    pub fn new(actor: CurrentActor, seeds: Vec<WorkspaceSeed>) -> Self {
        let workspaces = seeds
            .into_iter()
            .map(|seed| (seed.id, Workspace::new(seed.name, seed.memberships)))
            .collect();
        Self {
            workspaces: Arc::new(RwLock::new(workspaces)),
            actor: Arc::new(actor),
        }
    }
}
