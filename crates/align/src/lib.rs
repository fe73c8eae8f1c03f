//! `skosalign-align` — label-based alignment of two concept schemes.
//!
//! Pure engine crate: receives pre-loaded graphs, returns promoted
//! same-entity assertions plus an advisory report. No CLI or IO dependencies.

pub mod aggregate;
pub mod config;
pub mod engine;
pub mod error;
pub mod evidence;
pub mod graph;
pub mod index;
pub mod label;
pub mod matcher;
pub mod model;
pub mod promote;
pub mod unmatched;

pub use config::AlignConfig;
pub use engine::run;
pub use error::AlignError;
pub use graph::{Graph, Literal, Object, Triple};
pub use model::{AlignResult, MatchCandidate};
