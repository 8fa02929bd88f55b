//! Weekly cast scheduling for a touring theatre company.
//!
//! Assigns performers to the stage roles of every show in a week, subject to
//! hard rules (full headcount, role eligibility, gender-restricted roles,
//! consecutive/weekend/double-day limits) and fairness goals (balanced
//! workload, one RED rest day per performer).
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Show`, `CastMember`, `Role`, `RoleCatalog`,
//!   `Assignment`, `AutoGenerateResult`
//! - **`scheduler`**: `CastScheduler` and its parts (constraint checker,
//!   constructive strategy, OFF scorer, partial fallback, RED-day pass,
//!   workload statistics)
//! - **`validation`**: Input checks and full schedule validation with
//!   remediation suggestions
//! - **`config`**: `SchedulerConfig` limits and retry budget
//! - **`roster`**: The company directory boundary
//! - **`error`**: Error types
//!
//! # Example
//!
//! ```
//! use cast_rota::models::{CastMember, Gender, Role, Show};
//! use cast_rota::scheduler::CastScheduler;
//! use cast_rota::validation::validate_schedule;
//! use cast_rota::config::SchedulerConfig;
//! use cast_rota::models::RoleCatalog;
//! use chrono::{NaiveDate, NaiveTime};
//!
//! let mon = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
//! let tue = NaiveDate::from_ymd_opt(2024, 5, 7).unwrap();
//! let shows = vec![
//!     Show::day_off("dark", mon),
//!     Show::new("opening", tue, NaiveTime::from_hms_opt(19, 30, 0).unwrap()),
//! ];
//! let cast: Vec<CastMember> = (0..10)
//!     .map(|i| {
//!         CastMember::new(format!("Performer {i}"))
//!             .with_roles(Role::ALL)
//!             .with_gender(Gender::Female)
//!     })
//!     .collect();
//!
//! let mut scheduler = CastScheduler::with_seed(1);
//! let result = scheduler.auto_generate(&shows, Some(cast.clone()));
//! assert!(result.success);
//!
//! let check = validate_schedule(
//!     &shows,
//!     &cast,
//!     &RoleCatalog::standard(),
//!     &SchedulerConfig::default(),
//!     &result.assignments,
//! );
//! assert!(!check.has_critical_errors());
//! assert!(result.assignments_for_show("dark").iter().all(|a| a.is_red_day));
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod roster;
pub mod scheduler;
pub mod validation;
