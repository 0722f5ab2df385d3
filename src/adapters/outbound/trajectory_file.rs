use crate::common::{DomainError, DomainResult};
use crate::domains::segregation::{Trajectory, TrajectorySource};
use async_trait::async_trait;
use std::env;
use std::path::PathBuf;

/// Reads `<base>/<name>` as a JSON trajectory.
pub struct FileTrajectorySource {
    base: PathBuf,
}

impl FileTrajectorySource {
    /// `base` defaults to `$SEGREGATION_DATA_DIR`, then the working directory.
    pub fn new(base: Option<PathBuf>) -> Self {
        let base = base.unwrap_or_else(|| match env::var("SEGREGATION_DATA_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => PathBuf::from("."),
        });
        Self { base }
    }

    pub fn path_of(&self, name: &str) -> PathBuf {
        self.base.join(name)
    }
}

#[async_trait]
impl TrajectorySource for FileTrajectorySource {
    async fn load_trajectory(&self, name: &str) -> DomainResult<Trajectory> {
        let path = self.path_of(name);
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| DomainError::InfrastructureError(format!("{}: {}", path.display(), e)))?;
        Trajectory::from_json(&content)
    }
}
