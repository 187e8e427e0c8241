//! Role and roster value objects

use crate::core::error::DomainError;
use crate::discussion::entities::Utterance;
use serde::{Deserialize, Serialize};

/// Minimum number of roles in a discussion
pub const MIN_ROLES: usize = 2;
/// Maximum number of roles in a discussion
pub const MAX_ROLES: usize = 6;

/// A discussion participant persona (Value Object)
///
/// The name attributes utterances; the description shapes how the model
/// plays the part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Role {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: Some(description.into()),
        }
    }

    /// The persona text used when prompting: name alone, or
    /// "name (description)" when a description is present.
    pub fn persona(&self) -> String {
        match &self.description {
            Some(desc) => format!("{} ({})", self.name, desc),
            None => self.name.clone(),
        }
    }

    /// Parse a `name:description` CLI-style spec; a bare name is valid.
    pub fn parse_spec(spec: &str) -> Result<Self, DomainError> {
        let (name, description) = match spec.split_once(':') {
            Some((n, d)) => (n.trim(), Some(d.trim())),
            None => (spec.trim(), None),
        };
        if name.is_empty() {
            return Err(DomainError::EmptyRoleName);
        }
        Ok(match description.filter(|d| !d.is_empty()) {
            Some(d) => Role::with_description(name, d),
            None => Role::new(name),
        })
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The ordered set of roles in one discussion (Value Object)
///
/// Order is significant: it is the speaking order, and the cursor
/// addresses roles by position. Names must be distinct — positional
/// addressing plus transcript-based roster re-derivation both break
/// under duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRoster {
    roles: Vec<Role>,
}

impl RoleRoster {
    /// Build a roster, enforcing the 2..=6 size bound and name uniqueness.
    pub fn new(roles: Vec<Role>) -> Result<Self, DomainError> {
        if roles.len() < MIN_ROLES || roles.len() > MAX_ROLES {
            return Err(DomainError::InvalidRoleCount {
                got: roles.len(),
                min: MIN_ROLES,
                max: MAX_ROLES,
            });
        }
        for role in &roles {
            if role.name.trim().is_empty() {
                return Err(DomainError::EmptyRoleName);
            }
        }
        for (i, role) in roles.iter().enumerate() {
            if roles[..i].iter().any(|r| r.name == role.name) {
                return Err(DomainError::DuplicateRole(role.name.clone()));
            }
        }
        Ok(Self { roles })
    }

    /// Re-derive a roster from a transcript's distinct speaker roles, in
    /// first-seen order. Pseudo-roles (system, analyst) are skipped.
    ///
    /// Used by continuation when the caller does not re-supply the roster.
    pub fn from_transcript(utterances: &[Utterance]) -> Result<Self, DomainError> {
        let mut roles: Vec<Role> = Vec::new();
        for utterance in utterances {
            if utterance.is_pseudo_role() {
                continue;
            }
            if !roles.iter().any(|r| r.name == utterance.role) {
                roles.push(Role::new(utterance.role.clone()));
            }
        }
        Self::new(roles)
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Role> {
        self.roles.get(index)
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn contains(&self, name: &str) -> bool {
        self.roles.iter().any(|r| r.name == name)
    }

    /// Roster listing for prompts: one persona per line.
    pub fn persona_list(&self) -> String {
        self.roles
            .iter()
            .map(|r| format!("- {}", r.persona()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster_of(names: &[&str]) -> Result<RoleRoster, DomainError> {
        RoleRoster::new(names.iter().map(|n| Role::new(*n)).collect())
    }

    #[test]
    fn test_roster_bounds() {
        assert!(roster_of(&["A", "B"]).is_ok());
        assert!(roster_of(&["A", "B", "C", "D", "E", "F"]).is_ok());

        assert_eq!(
            roster_of(&["A"]).unwrap_err(),
            DomainError::InvalidRoleCount {
                got: 1,
                min: 2,
                max: 6
            }
        );
        assert!(roster_of(&["A", "B", "C", "D", "E", "F", "G"]).is_err());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        assert_eq!(
            roster_of(&["CEO", "CTO", "CEO"]).unwrap_err(),
            DomainError::DuplicateRole("CEO".to_string())
        );
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = RoleRoster::new(vec![Role::new("CEO"), Role::new("  ")]);
        assert_eq!(result.unwrap_err(), DomainError::EmptyRoleName);
    }

    #[test]
    fn test_persona() {
        let bare = Role::new("Engineer");
        assert_eq!(bare.persona(), "Engineer");

        let described = Role::with_description("Engineer", "pragmatic, cost-conscious");
        assert_eq!(described.persona(), "Engineer (pragmatic, cost-conscious)");
    }

    #[test]
    fn test_parse_spec() {
        let role = Role::parse_spec("CFO: guards the budget").unwrap();
        assert_eq!(role.name, "CFO");
        assert_eq!(role.description.as_deref(), Some("guards the budget"));

        let bare = Role::parse_spec("CFO").unwrap();
        assert_eq!(bare.name, "CFO");
        assert!(bare.description.is_none());

        assert!(Role::parse_spec(":no name").is_err());
    }

    #[test]
    fn test_from_transcript_skips_pseudo_roles() {
        let transcript = vec![
            Utterance::spoken("Analyst", "first"),
            Utterance::system("steer toward costs"),
            Utterance::spoken("Engineer", "second"),
            Utterance::analyst("cross-cutting note"),
            Utterance::spoken("Analyst", "third"),
        ];
        let roster = RoleRoster::from_transcript(&transcript).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get(0).unwrap().name, "Analyst");
        assert_eq!(roster.get(1).unwrap().name, "Engineer");
    }
}
