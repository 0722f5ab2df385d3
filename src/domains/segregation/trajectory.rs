use super::assignment::AgentId;
use super::geometry::Position3D;
use crate::common::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentPose {
    pub id: AgentId,
    pub position: Position3D,
}

impl AgentPose {
    pub fn new(id: impl Into<String>, position: Position3D) -> Self {
        Self { id: AgentId::new(id), position }
    }
}

/// Positions of every agent at one simulation step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryStep {
    pub step: u64,
    pub agents: Vec<AgentPose>,
}

impl TrajectoryStep {
    /// Agent ids must be unique and positions finite.
    pub fn validate(&self) -> DomainResult<()> {
        let mut seen = HashSet::with_capacity(self.agents.len());
        for pose in &self.agents {
            if !seen.insert(&pose.id) {
                return Err(DomainError::DuplicateAgent { agent_id: pose.id.0.clone() });
            }
            if !pose.position.is_finite() {
                return Err(DomainError::InvalidConfiguration {
                    reason: format!("non-finite position for {} at step {}", pose.id, self.step),
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub steps: Vec<TrajectoryStep>,
}

impl Trajectory {
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let trajectory: Trajectory = serde_json::from_str(json)?;
        for step in &trajectory.steps {
            step.validate()?;
        }
        Ok(trajectory)
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
