//! Ability definitions and the balance scorer
//!
//! Scores an ability's throughput and utility against its costs and
//! classifies the result into a balance band.

pub mod definition;
pub mod score;
pub mod weights;

pub use definition::{AbilityCategory, AbilityDefinition, ChannelEffect, StatusEffect};
pub use score::{breakdown, score, ScoreBreakdown};
