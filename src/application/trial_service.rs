// Trial Service - runs the segregation cost over recorded or sampled snapshots
use crate::common::{DomainError, DomainResult};
use crate::domains::logger::DynLogger;
use crate::domains::segregation::{CostBreakdown, PlacementSpec, SegregationCostEvaluator, Trajectory, TrajectorySource};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepCost {
    pub step: u64,
    pub cost: CostBreakdown,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostSummary {
    pub steps: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub final_cost: f64,
}

impl CostSummary {
    /// `None` for an empty series.
    pub fn from_costs(costs: &[f64]) -> Option<Self> {
        let final_cost = *costs.last()?;
        let (min, max, sum) = costs
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY, 0.0), |(lo, hi, sum), c| {
                (lo.min(*c), hi.max(*c), sum + c)
            });
        Some(Self { steps: costs.len(), mean: sum / costs.len() as f64, min, max, final_cost })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrialReport {
    pub steps: Vec<StepCost>,
    pub summary: CostSummary,
}

pub struct TrialService {
    evaluator: SegregationCostEvaluator,
    logger: DynLogger,
}

impl TrialService {
    pub fn new(evaluator: SegregationCostEvaluator, logger: DynLogger) -> Self {
        Self { evaluator, logger }
    }

    pub fn evaluator(&self) -> &SegregationCostEvaluator {
        &self.evaluator
    }

    /// Evaluate every step in order. The first failing step aborts the trial.
    pub fn run_trajectory(&self, trajectory: &Trajectory) -> DomainResult<TrialReport> {
        let mut steps = Vec::with_capacity(trajectory.steps.len());
        for snapshot in &trajectory.steps {
            let cost = self.evaluator.evaluate_poses(&snapshot.agents).map_err(|source| {
                self.logger.error(&format!("step {}: {}", snapshot.step, source));
                DomainError::StepFailed { step: snapshot.step, source }
            })?;
            steps.push(StepCost { step: snapshot.step, cost });
        }

        let totals: Vec<f64> = steps.iter().map(|s| s.cost.total).collect();
        let summary = CostSummary::from_costs(&totals).ok_or_else(|| DomainError::InvalidConfiguration {
            reason: "trajectory has no steps".to_string(),
        })?;
        self.logger.info(&format!(
            "trial of {} steps: final {:.4}, mean {:.4}, min {:.4}, max {:.4}",
            summary.steps, summary.final_cost, summary.mean, summary.min, summary.max
        ));
        Ok(TrialReport { steps, summary })
    }

    pub async fn run_source(&self, source: &dyn TrajectorySource, name: &str) -> DomainResult<TrialReport> {
        self.logger.info(&format!("loading trajectory {}", name));
        let trajectory = source.load_trajectory(name).await?;
        self.run_trajectory(&trajectory)
    }

    /// One cost per random placement; each placement is scored as a single-step trial.
    pub fn run_placements<R: Rng>(&self, spec: &PlacementSpec, trials: usize, rng: &mut R) -> DomainResult<TrialReport> {
        let mut steps = Vec::with_capacity(trials);
        for trial in 0..trials as u64 {
            let poses = spec.sample(rng)?;
            let cost = self.evaluator.evaluate_poses(&poses).map_err(|source| {
                self.logger.error(&format!("trial {}: {}", trial, source));
                DomainError::StepFailed { step: trial, source }
            })?;
            steps.push(StepCost { step: trial, cost });
        }
        let totals: Vec<f64> = steps.iter().map(|s| s.cost.total).collect();
        let summary = CostSummary::from_costs(&totals).ok_or_else(|| DomainError::InvalidConfiguration {
            reason: "at least one trial is required".to_string(),
        })?;
        self.logger.info(&format!(
            "{} placements of {} x {}: mean {:.4}, min {:.4}, max {:.4}",
            trials, spec.groups, spec.per_group, summary.mean, summary.min, summary.max
        ));
        Ok(TrialReport { steps, summary })
    }
}
