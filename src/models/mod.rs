//! Cast scheduling domain models.
//!
//! Plain data handed in by callers and handed back as results. Nothing here
//! holds scheduling state; the engine builds its own working structures per
//! attempt.
//!
//! # Domain Mappings
//!
//! | cast-rota | Meaning |
//! |-----------|---------|
//! | Show | One performance (or travel / company day-off entry) |
//! | CastMember | A performer on the roster |
//! | Role | A part staffed in every show |
//! | Position | A role, or OFF |
//! | Assignment | One performer's position for one show |

mod assignment;
mod cast;
mod role;
mod show;

pub use assignment::{Assignment, AutoGenerateResult};
pub use cast::{CastMember, Gender};
pub use role::{Position, Role, RoleCatalog, RoleDefinition, UnknownRole};
pub use show::{Show, ShowStatus};
