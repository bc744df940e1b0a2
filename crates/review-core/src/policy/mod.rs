//! Reviewer selection policy

mod reviewer_selection;

pub use reviewer_selection::{initial_reviewers, pick_replacement, MAX_REVIEWERS};
