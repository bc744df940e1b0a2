//! Candidate selection for reviewer assignment and reassignment.
//!
//! Pure functions over already-fetched users. Candidates are considered in
//! ascending order of their external user id, whatever order storage returned.

use crate::entities::User;

/// Upper bound on reviewers picked at PR creation
pub const MAX_REVIEWERS: usize = 2;

fn ordered_active(pool: &[User]) -> Vec<&User> {
    let mut candidates: Vec<&User> = pool.iter().filter(|u| u.is_eligible_reviewer()).collect();
    candidates.sort_by(|a, b| a.user_id.cmp(&b.user_id));
    candidates
}

/// Candidates for a new pull request, best first.
///
/// Returns every active non-author member in selection order. The caller
/// assigns from the front until [`MAX_REVIEWERS`] succeed, so a failed
/// assignment can be skipped without losing the slot.
pub fn initial_reviewers(pool: &[User], author_id: &str) -> Vec<String> {
    ordered_active(pool)
        .into_iter()
        .filter(|u| u.user_id != author_id)
        .map(|u| u.user_id.clone())
        .collect()
}

/// First active member not in `{author} ∪ current_reviewers`.
///
/// `current_reviewers` includes the reviewer being replaced.
pub fn pick_replacement(pool: &[User], author_id: &str, current_reviewers: &[String]) -> Option<String> {
    ordered_active(pool)
        .into_iter()
        .find(|u| u.user_id != author_id && !current_reviewers.iter().any(|r| r == &u.user_id))
        .map(|u| u.user_id.clone())
}
