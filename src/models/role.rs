//! Stage roles and the role catalog.
//!
//! A show is staffed by filling every role in the [`RoleCatalog`] with a
//! distinct performer. Everyone else on the roster is [`Position::Off`]
//! for that show.
//!
//! Gender restrictions are catalog data: a role may be limited to performers
//! of one [`Gender`], checked against the performer's own `gender` field.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Gender;

/// A stage role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    Sarge,
    Potato,
    Mozzie,
    Ringo,
    Particle,
    Bin,
    Cornish,
    Who,
}

impl Role {
    /// All roles in declaration order.
    pub const ALL: [Role; 8] = [
        Role::Sarge,
        Role::Potato,
        Role::Mozzie,
        Role::Ringo,
        Role::Particle,
        Role::Bin,
        Role::Cornish,
        Role::Who,
    ];

    /// Display name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Sarge => "Sarge",
            Role::Potato => "Potato",
            Role::Mozzie => "Mozzie",
            Role::Ringo => "Ringo",
            Role::Particle => "Particle",
            Role::Bin => "Bin",
            Role::Cornish => "Cornish",
            Role::Who => "Who",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown role name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role '{0}'")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .iter()
            .copied()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// What a performer does for one show: a stage role, or OFF.
///
/// Serializes as the role name or the literal `"OFF"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Position {
    /// Performing the given role.
    Role(Role),
    /// Not performing this show.
    Off,
}

impl Position {
    /// The literal used for OFF.
    pub const OFF: &'static str = "OFF";

    /// The role, if this is a performing position.
    pub fn role(&self) -> Option<Role> {
        match self {
            Position::Role(r) => Some(*r),
            Position::Off => None,
        }
    }

    /// Whether this is OFF.
    pub fn is_off(&self) -> bool {
        matches!(self, Position::Off)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Role(r) => fmt::Display::fmt(r, f),
            Position::Off => f.write_str(Self::OFF),
        }
    }
}

impl From<Role> for Position {
    fn from(role: Role) -> Self {
        Position::Role(role)
    }
}

impl From<Position> for String {
    fn from(p: Position) -> Self {
        p.to_string()
    }
}

impl TryFrom<String> for Position {
    type Error = UnknownRole;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if s == Position::OFF {
            Ok(Position::Off)
        } else {
            s.parse().map(Position::Role)
        }
    }
}

/// A role staffed in every show, with its optional gender restriction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDefinition {
    /// The role.
    pub role: Role,
    /// Only performers of this gender may play the role.
    #[serde(default)]
    pub restricted_to: Option<Gender>,
}

impl RoleDefinition {
    /// An unrestricted role.
    pub fn open(role: Role) -> Self {
        Self {
            role,
            restricted_to: None,
        }
    }

    /// A role limited to one gender.
    pub fn restricted(role: Role, gender: Gender) -> Self {
        Self {
            role,
            restricted_to: Some(gender),
        }
    }
}

/// The set of roles that must be filled in every show.
///
/// Passed into the scheduler and validator explicitly; there is no global
/// role list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCatalog {
    roles: Vec<RoleDefinition>,
}

impl RoleCatalog {
    /// Creates a catalog from role definitions. Later duplicates are dropped.
    pub fn new(definitions: Vec<RoleDefinition>) -> Self {
        let mut roles: Vec<RoleDefinition> = Vec::with_capacity(definitions.len());
        for def in definitions {
            if !roles.iter().any(|d| d.role == def.role) {
                roles.push(def);
            }
        }
        Self { roles }
    }

    /// The standard company: eight roles, `Bin` and `Cornish` female-only.
    pub fn standard() -> Self {
        Self::new(
            Role::ALL
                .iter()
                .map(|&role| match role {
                    Role::Bin | Role::Cornish => RoleDefinition::restricted(role, Gender::Female),
                    _ => RoleDefinition::open(role),
                })
                .collect(),
        )
    }

    /// Role definitions in catalog order.
    pub fn definitions(&self) -> &[RoleDefinition] {
        &self.roles
    }

    /// Roles in catalog order.
    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.roles.iter().map(|d| d.role)
    }

    /// Number of performers on stage per show.
    pub fn role_count(&self) -> usize {
        self.roles.len()
    }

    /// Whether the catalog staffs this role.
    pub fn contains(&self, role: Role) -> bool {
        self.roles.iter().any(|d| d.role == role)
    }

    /// Gender restriction for a role, if any.
    pub fn restriction(&self, role: Role) -> Option<Gender> {
        self.roles
            .iter()
            .find(|d| d.role == role)
            .and_then(|d| d.restricted_to)
    }
}

impl Default for RoleCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
