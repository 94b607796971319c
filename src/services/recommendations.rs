use rand::{seq::SliceRandom, Rng};
use serde::Serialize;
use std::collections::HashSet;

/// Outcome of asking for something to watch next
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Recommendation {
    /// A catalog title not yet in the log
    Suggested { title: String },
    /// Every catalog title has been watched; a normal outcome, not an error
    AllWatched,
}

/// Picks a random catalog title that has not been watched yet
///
/// Each unwatched title is equally likely. Calls are independent: nothing is
/// remembered between them, so the same title may come up twice in a row.
/// Titles in `watched` that are not in the catalog are ignored.
pub fn suggest<'a, R, I>(catalog: &[&str], watched: I, rng: &mut R) -> Recommendation
where
    R: Rng + ?Sized,
    I: IntoIterator<Item = &'a str>,
{
    let watched: HashSet<&str> = watched.into_iter().collect();
    let unwatched: Vec<&str> = catalog
        .iter()
        .copied()
        .filter(|title| !watched.contains(title))
        .collect();

    tracing::debug!(
        catalog = catalog.len(),
        unwatched = unwatched.len(),
        "Choosing recommendation"
    );

    match unwatched.choose(rng) {
        Some(title) => Recommendation::Suggested {
            title: title.to_string(),
        },
        None => Recommendation::AllWatched,
    }
}
