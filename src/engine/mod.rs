// src/engine/mod.rs
//
// rows → group (by match) → aggregate (by team) → summary (means + leaders)

pub mod aggregate;
pub mod group;
pub mod summary;

pub use aggregate::aggregate;
pub use group::{group_rows, score_row};
pub use summary::{mean, Leader, Summary, TeamSummary};
