use crate::common::{CostError, CostResult, DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Opaque agent identity as the simulation host reports it (e.g. `"fb12"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(pub String);

impl AgentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AgentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(pub u32);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "group-{}", self.0)
    }
}

/// Immutable agent → group table, fixed at experiment setup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupAssignment {
    groups: HashMap<AgentId, GroupId>,
}

impl GroupAssignment {
    /// Build from `(agent, group)` pairs. An agent appearing twice is rejected,
    /// even if both entries name the same group.
    pub fn from_pairs<I>(pairs: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = (AgentId, GroupId)>,
    {
        let mut groups = HashMap::new();
        for (agent, group) in pairs {
            if agent.as_str().is_empty() {
                return Err(DomainError::InvalidConfiguration {
                    reason: format!("empty agent id in {}", group),
                });
            }
            if groups.contains_key(&agent) {
                return Err(DomainError::DuplicateAgent { agent_id: agent.0 });
            }
            groups.insert(agent, group);
        }
        Ok(Self { groups })
    }

    pub fn group_of(&self, agent: &AgentId) -> CostResult<GroupId> {
        self.groups
            .get(agent)
            .copied()
            .ok_or_else(|| CostError::MissingAssignment { agent_id: agent.0.clone() })
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Distinct groups, ascending.
    pub fn group_ids(&self) -> Vec<GroupId> {
        let mut ids: Vec<GroupId> = self.groups.values().copied().collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// Members of `group`, sorted by id.
    pub fn members(&self, group: GroupId) -> Vec<AgentId> {
        let mut members: Vec<AgentId> = self
            .groups
            .iter()
            .filter(|(_, g)| **g == group)
            .map(|(a, _)| a.clone())
            .collect();
        members.sort();
        members
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs() -> Vec<(AgentId, GroupId)> {
        vec![
            ("fb0".into(), GroupId(1)),
            ("fb1".into(), GroupId(0)),
            ("fb2".into(), GroupId(1)),
        ]
    }

    #[test]
    fn lookup_known_and_unknown_agents() {
        let assignment = GroupAssignment::from_pairs(pairs()).unwrap();
        assert_eq!(assignment.group_of(&"fb2".into()), Ok(GroupId(1)));
        assert_eq!(
            assignment.group_of(&"fb9".into()),
            Err(CostError::MissingAssignment { agent_id: "fb9".to_string() })
        );
    }

    #[test]
    fn groups_and_members_are_sorted() {
        let assignment = GroupAssignment::from_pairs(pairs()).unwrap();
        assert_eq!(assignment.group_ids(), vec![GroupId(0), GroupId(1)]);
        assert_eq!(assignment.members(GroupId(1)), vec![AgentId::new("fb0"), AgentId::new("fb2")]);
    }

    #[test]
    fn duplicate_agent_is_rejected() {
        let mut p = pairs();
        p.push(("fb0".into(), GroupId(1)));
        match GroupAssignment::from_pairs(p) {
            Err(DomainError::DuplicateAgent { agent_id }) => assert_eq!(agent_id, "fb0"),
            other => panic!("Expected DuplicateAgent, got {:?}", other),
        }
    }

    #[test]
    fn empty_agent_id_is_rejected() {
        let result = GroupAssignment::from_pairs(vec![(AgentId::new(""), GroupId(0))]);
        assert!(matches!(result, Err(DomainError::InvalidConfiguration { .. })));
    }
}
