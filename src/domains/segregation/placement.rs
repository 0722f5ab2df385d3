use super::assignment::{AgentId, GroupAssignment, GroupId};
use super::geometry::Position3D;
use super::trajectory::AgentPose;
use crate::common::{DomainError, DomainResult};
use rand::Rng;
use std::f64::consts::TAU;

/// Upper bound on the agents a single placement may hold.
pub const MAX_PLACEMENT_AGENTS: u32 = 1_000_000;

/// Random initial placement of a grouped swarm on the ground plane.
///
/// Each group is dropped uniformly inside a disc of radius `spread`. With `mixed`
/// all discs share the origin; otherwise the disc centres sit evenly on a ring of
/// radius `separation`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementSpec {
    pub groups: u32,
    pub per_group: u32,
    pub spread: f64,
    pub separation: f64,
    pub mixed: bool,
}

impl Default for PlacementSpec {
    fn default() -> Self {
        Self { groups: 2, per_group: 5, spread: 0.5, separation: 2.0, mixed: false }
    }
}

impl PlacementSpec {
    pub fn validate(&self) -> DomainResult<()> {
        if self.groups == 0 || self.per_group == 0 {
            return Err(DomainError::InvalidConfiguration {
                reason: "placement needs at least one group with one agent".to_string(),
            });
        }
        match self.groups.checked_mul(self.per_group) {
            Some(total) if total <= MAX_PLACEMENT_AGENTS => {}
            _ => {
                return Err(DomainError::InvalidConfiguration {
                    reason: format!(
                        "{} groups of {} agents exceeds {} agents",
                        self.groups, self.per_group, MAX_PLACEMENT_AGENTS
                    ),
                });
            }
        }
        if !(self.spread.is_finite() && self.spread >= 0.0 && self.separation.is_finite() && self.separation >= 0.0) {
            return Err(DomainError::InvalidConfiguration {
                reason: format!("invalid spread {} / separation {}", self.spread, self.separation),
            });
        }
        Ok(())
    }

    pub fn anchor(&self, group: u32) -> Position3D {
        if self.mixed {
            return Position3D::ZERO;
        }
        let angle = TAU * group as f64 / self.groups as f64;
        Position3D::new(self.separation * angle.cos(), self.separation * angle.sin(), 0.0)
    }

    /// Assignment for the agents `fb0..fbN`, numbered group by group.
    pub fn assignment(&self) -> DomainResult<GroupAssignment> {
        self.validate()?;
        GroupAssignment::from_pairs(
            (0..self.groups)
                .flat_map(|g| (0..self.per_group).map(move |i| (agent_id(g * self.per_group + i), GroupId(g)))),
        )
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> DomainResult<Vec<AgentPose>> {
        self.validate()?;
        let mut poses = Vec::with_capacity(self.groups as usize * self.per_group as usize);
        for g in 0..self.groups {
            let anchor = self.anchor(g);
            for i in 0..self.per_group {
                // sqrt keeps the density uniform over the disc
                let r = self.spread * rng.gen::<f64>().sqrt();
                let theta = rng.gen_range(0.0..TAU);
                let offset = Position3D::new(r * theta.cos(), r * theta.sin(), 0.0);
                poses.push(AgentPose { id: agent_id(g * self.per_group + i), position: anchor + offset });
            }
        }
        Ok(poses)
    }
}

fn agent_id(n: u32) -> AgentId {
    AgentId::new(format!("fb{}", n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn every_sampled_agent_is_assigned() {
        let spec = PlacementSpec { groups: 3, per_group: 4, ..PlacementSpec::default() };
        let assignment = spec.assignment().unwrap();
        let poses = spec.sample(&mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(poses.len(), 12);
        assert_eq!(assignment.len(), 12);
        for pose in &poses {
            assert!(assignment.group_of(&pose.id).is_ok());
        }
        assert_eq!(assignment.group_of(&AgentId::new("fb5")), Ok(GroupId(1)));
    }

    #[test]
    fn samples_stay_inside_their_disc() {
        let spec = PlacementSpec { groups: 4, per_group: 25, spread: 0.3, separation: 5.0, mixed: false };
        let assignment = spec.assignment().unwrap();
        for pose in spec.sample(&mut StdRng::seed_from_u64(11)).unwrap() {
            let GroupId(g) = assignment.group_of(&pose.id).unwrap();
            let d2 = pose.position.square_distance(&spec.anchor(g));
            assert!(d2 <= 0.3 * 0.3 + 1e-12);
            assert_eq!(pose.position.z, 0.0);
        }
    }

    #[test]
    fn same_seed_same_placement() {
        let spec = PlacementSpec::default();
        let a = spec.sample(&mut StdRng::seed_from_u64(42)).unwrap();
        let b = spec.sample(&mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn oversized_placement_is_rejected() {
        let spec = PlacementSpec { groups: 2, per_group: 2_147_483_648, ..PlacementSpec::default() };
        assert!(matches!(spec.validate(), Err(DomainError::InvalidConfiguration { .. })));
        assert!(spec.assignment().is_err());
        assert!(spec.sample(&mut StdRng::seed_from_u64(1)).is_err());

        let spec = PlacementSpec { groups: 1, per_group: MAX_PLACEMENT_AGENTS + 1, ..PlacementSpec::default() };
        assert!(spec.validate().is_err());
        let spec = PlacementSpec { groups: 1, per_group: MAX_PLACEMENT_AGENTS, ..PlacementSpec::default() };
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn empty_placement_is_rejected() {
        let spec = PlacementSpec { groups: 0, ..PlacementSpec::default() };
        assert!(spec.assignment().is_err());
        assert!(spec.sample(&mut StdRng::seed_from_u64(1)).is_err());
    }
}
