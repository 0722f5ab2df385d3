use thiserror::Error;

/// Failures of a single cost evaluation. Fatal for that call; no partial cost is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CostError {
    #[error("No group assignment for agent: {agent_id}")]
    MissingAssignment { agent_id: String },

    #[error("Cannot evaluate cost of an empty population")]
    EmptyPopulation,

    #[error("Non-finite position for agent: {agent_id}")]
    NonFinitePosition { agent_id: String },
}

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("Agent listed more than once: {agent_id}")]
    DuplicateAgent { agent_id: String },

    #[error("Cost evaluation failed: {0}")]
    Cost(#[from] CostError),

    #[error("Cost evaluation failed at step {step}: {source}")]
    StepFailed { step: u64, source: CostError },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Infrastructure error: {0}")]
    InfrastructureError(String),
}

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Configuration error: {0}")]
    Configuration(#[from] anyhow::Error),
}

pub type CostResult<T> = Result<T, CostError>;
pub type DomainResult<T> = Result<T, DomainError>;
pub type ApplicationResult<T> = Result<T, ApplicationError>;
