use crate::common::{DomainError, DomainResult};
use crate::domains::segregation::{
    AgentId, EvaluatorConfig, GroupAssignment, GroupId, SegregationCostEvaluator,
};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub evaluator: EvaluatorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub groups: Vec<GroupConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Domain log file; console only when absent.
    pub file: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupConfig {
    pub id: u32,
    pub agents: Vec<String>,
}

impl Config {
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn group_assignment(&self) -> DomainResult<GroupAssignment> {
        if self.groups.is_empty() {
            return Err(DomainError::InvalidConfiguration {
                reason: "no groups configured".to_string(),
            });
        }
        GroupAssignment::from_pairs(self.groups.iter().flat_map(|group| {
            group
                .agents
                .iter()
                .map(move |agent| (AgentId::new(agent.as_str()), GroupId(group.id)))
        }))
    }

    pub fn build_evaluator(&self) -> DomainResult<SegregationCostEvaluator> {
        SegregationCostEvaluator::new(self.group_assignment()?, self.evaluator)
    }
}
