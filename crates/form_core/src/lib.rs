//! Pure registration-form logic: data model, validation engines, and the
//! form controller reducer.
//!
//! The crate deliberately has no UI dependency. Both validation engines map a
//! [`RegistrationForm`] snapshot to an [`ErrorMap`] using the single
//! canonical rule set in [`rules`], and the [`controller`] reducer mediates
//! between UI events and whichever engine a form instance selected.

pub mod controller;
pub mod manual;
mod model;
pub mod rules;
pub mod schema;

pub use controller::{EngineKind, FormAction, FormEffect, FormPhase, FormState};
pub use model::{ErrorMap, Field, Gender, Interest, RegistrationForm};
pub use schema::{Schema, ValidationErrors, Violation};
