//! Consistency validation for border-crossing document sets.
//!
//! This crate owns the five business rules, the string canonicalization and
//! fuzzy matching they share, and the engine that runs them. Turning an
//! [`Evaluation`] into a response or report is `cruce-report`'s job.

pub mod engine;
pub mod matcher;
pub mod observer;
pub mod rules;
pub mod text;

pub use engine::{Evaluation, RuleEngine, RuleRun};
pub use observer::{NoopObserver, TracingObserver, ValidationObserver};
pub use rules::{CrossingRule, RuleContext, broker_code, catalog, document_age};
