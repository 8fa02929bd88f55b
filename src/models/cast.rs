//! Cast member model.
//!
//! A cast member is a performer on the company roster. Their name is the
//! unique key used in every assignment row. Eligibility for a role needs
//! both the role in `eligible_roles` and, for gender-restricted roles,
//! a matching `gender`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{Role, RoleCatalog};

/// Performer gender as relevant to restricted roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Gender {
    Female,
    Male,
    /// Not recorded. Never matches a restricted role.
    #[default]
    Unspecified,
}

/// A performer on the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
    /// Unique name.
    pub name: String,
    /// Roles this performer is rehearsed for.
    pub eligible_roles: BTreeSet<Role>,
    /// Gender, checked against restricted roles.
    #[serde(default)]
    pub gender: Gender,
}

impl CastMember {
    /// Creates a performer with no eligible roles.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            eligible_roles: BTreeSet::new(),
            gender: Gender::Unspecified,
        }
    }

    /// Adds an eligible role.
    pub fn with_role(mut self, role: Role) -> Self {
        self.eligible_roles.insert(role);
        self
    }

    /// Adds several eligible roles.
    pub fn with_roles(mut self, roles: impl IntoIterator<Item = Role>) -> Self {
        self.eligible_roles.extend(roles);
        self
    }

    /// Sets the gender.
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    /// Whether the performer has rehearsed the role.
    pub fn knows(&self, role: Role) -> bool {
        self.eligible_roles.contains(&role)
    }

    /// Whether the catalog's gender restriction for `role` admits this performer.
    pub fn meets_restriction(&self, role: Role, catalog: &RoleCatalog) -> bool {
        match catalog.restriction(role) {
            None => true,
            Some(required) => self.gender == required,
        }
    }

    /// Whether the performer may play the role at all (knows it and meets
    /// any restriction).
    pub fn can_play(&self, role: Role, catalog: &RoleCatalog) -> bool {
        self.knows(role) && self.meets_restriction(role, catalog)
    }
}
