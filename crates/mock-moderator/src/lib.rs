//! Mock moderation oracles for testing the submission pipeline.
//!
//! Provides deterministic [`Moderator`](moderator_core::Moderator)
//! implementations:
//!
//! - [`FixedModerator`] - always returns the same verdict
//! - [`FailingModerator`] - every review errors
//! - [`DelayedModerator`] - adds latency to another moderator

mod delayed;
mod failing;
mod fixed;

pub use delayed::DelayedModerator;
pub use failing::FailingModerator;
pub use fixed::FixedModerator;
