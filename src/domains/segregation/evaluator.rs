//! Segregation cost of a grouped swarm at one instant.
//!
//! The cost is `compactness - dispersion`, both normalised by `1 / (4 r²)` where `r` is
//! the robot footprint radius. Dispersion is the scatter of the true group centroids
//! around their unweighted mean, so spreading groups apart lowers the cost.
//!
//! The compactness term reproduces the reference loop function by default:
//! every group is scored against the centroid of the *whole* population, over the
//! whole population, and each group's score replaces the previous one instead of
//! adding to it (only the last group, in ascending [`GroupId`] order, survives).
//! Under that policy the term is simply the population scatter. Set
//! [`CompactnessReference::Group`] and [`GroupTermFold::Sum`] to get the
//! within-group scatter summed over all groups instead.

use super::assignment::{AgentId, GroupAssignment, GroupId};
use super::geometry::{centroid, scatter, Position3D};
use super::trajectory::AgentPose;
use crate::common::{CostError, CostResult, DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Footprint radius of a foot-bot, in metres.
pub const DEFAULT_ROBOT_RADIUS: f64 = 0.17;

/// Which positions and which centroid feed a group's compactness term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompactnessReference {
    /// All agents, measured from the population centroid.
    #[default]
    Population,
    /// The group's own members, measured from the group centroid.
    Group,
}

/// How per-group compactness terms combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupTermFold {
    /// Each group overwrites the previous term.
    #[default]
    LastGroup,
    Sum,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    pub robot_radius: f64,
    pub compactness_reference: CompactnessReference,
    pub group_term: GroupTermFold,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            robot_radius: DEFAULT_ROBOT_RADIUS,
            compactness_reference: CompactnessReference::default(),
            group_term: GroupTermFold::default(),
        }
    }
}

impl EvaluatorConfig {
    pub fn validate(&self) -> DomainResult<()> {
        if !self.robot_radius.is_finite() || self.robot_radius <= 0.0 {
            return Err(DomainError::InvalidConfiguration {
                reason: format!("robot_radius must be finite and positive, got {}", self.robot_radius),
            });
        }
        Ok(())
    }

    /// `1 / (4 r²)`: converts squared distances into robot-footprint units.
    pub fn normalization(&self) -> f64 {
        1.0 / (4.0 * self.robot_radius.powi(2))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostBreakdown {
    pub compactness: f64,
    pub dispersion: f64,
    pub total: f64,
    pub group_count: usize,
}

#[derive(Debug, Clone)]
pub struct SegregationCostEvaluator {
    assignment: GroupAssignment,
    config: EvaluatorConfig,
}

impl SegregationCostEvaluator {
    pub fn new(assignment: GroupAssignment, config: EvaluatorConfig) -> DomainResult<Self> {
        config.validate()?;
        Ok(Self { assignment, config })
    }

    /// Evaluator with the default radius and the literal compactness policy.
    pub fn with_assignment(assignment: GroupAssignment) -> Self {
        Self { assignment, config: EvaluatorConfig::default() }
    }

    pub fn assignment(&self) -> &GroupAssignment {
        &self.assignment
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    pub fn compute_cost(&self, agents: &[(AgentId, Position3D)]) -> CostResult<f64> {
        self.evaluate(agents).map(|b| b.total)
    }

    pub fn evaluate(&self, agents: &[(AgentId, Position3D)]) -> CostResult<CostBreakdown> {
        self.evaluate_iter(agents.iter().map(|(id, p)| (id, *p)))
    }

    pub fn evaluate_poses(&self, agents: &[AgentPose]) -> CostResult<CostBreakdown> {
        self.evaluate_iter(agents.iter().map(|a| (&a.id, a.position)))
    }

    fn evaluate_iter<'a, I>(&self, agents: I) -> CostResult<CostBreakdown>
    where
        I: Iterator<Item = (&'a AgentId, Position3D)>,
    {
        let mut population = Vec::new();
        let mut groups: BTreeMap<GroupId, Vec<Position3D>> = BTreeMap::new();
        for (id, position) in agents {
            if !position.is_finite() {
                return Err(CostError::NonFinitePosition { agent_id: id.0.clone() });
            }
            let group = self.assignment.group_of(id)?;
            groups.entry(group).or_default().push(position);
            population.push(position);
        }
        let population_centroid = centroid(&population).ok_or(CostError::EmptyPopulation)?;
        let scale = self.config.normalization();

        let mut compactness = 0.0;
        let mut centroids = Vec::with_capacity(groups.len());
        for members in groups.values() {
            // groups only exist once a member was pushed
            let group_centroid = centroid(members).ok_or(CostError::EmptyPopulation)?;
            let term = match self.config.compactness_reference {
                CompactnessReference::Population => scatter(&population, population_centroid),
                CompactnessReference::Group => scatter(members, group_centroid),
            } * scale;
            compactness = match self.config.group_term {
                GroupTermFold::LastGroup => term,
                GroupTermFold::Sum => compactness + term,
            };
            centroids.push(group_centroid);
        }

        let centroid_of_centroids = centroid(&centroids).ok_or(CostError::EmptyPopulation)?;
        let dispersion = scatter(&centroids, centroid_of_centroids) * scale;

        Ok(CostBreakdown {
            compactness,
            dispersion,
            total: compactness - dispersion,
            group_count: centroids.len(),
        })
    }
}
