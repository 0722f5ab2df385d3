use super::trajectory::Trajectory;
use crate::common::DomainResult;
use async_trait::async_trait;

/// Port for loading recorded agent trajectories (filesystem, simulator dumps, ...).
#[async_trait]
pub trait TrajectorySource: Send + Sync {
    async fn load_trajectory(&self, name: &str) -> DomainResult<Trajectory>;
}
