//! Question identifiers, the navigation route, and the random pick

use crate::lookup::LookupKey;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Opaque identifier of one question document (Value Object)
///
/// The store assigns these; no structure or ordering is assumed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for QuestionId {
    fn from(s: &str) -> Self {
        QuestionId::new(s)
    }
}

/// Navigation target produced by a successful resolution.
///
/// The route is handed to the navigation shell; this crate does not define
/// the destination view's behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRoute {
    pub key: LookupKey,
    pub question: QuestionId,
}

impl QuestionRoute {
    pub fn new(key: LookupKey, question: QuestionId) -> Self {
        Self { key, question }
    }

    /// Render the route path the way the router consumes it.
    pub fn path(&self) -> String {
        format!("/question/{}/{}", self.key, self.question)
    }
}

/// Choose one question uniformly at random from a listing.
///
/// Returns `None` on an empty listing. Generic over the RNG so callers can
/// pass a seeded one.
pub fn pick_question<'a, R: Rng + ?Sized>(
    questions: &'a [QuestionId],
    rng: &mut R,
) -> Option<&'a QuestionId> {
    if questions.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..questions.len());
    Some(&questions[index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    fn ids(raw: &[&str]) -> Vec<QuestionId> {
        raw.iter().map(|s| QuestionId::new(*s)).collect()
    }

    #[test]
    fn test_route_path() {
        let route = QuestionRoute::new(LookupKey::new("pslemath"), QuestionId::new("q1"));
        assert_eq!(route.path(), "/question/pslemath/q1");
    }

    #[test]
    fn test_pick_from_empty_listing_is_none() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick_question(&[], &mut rng), None);
    }

    #[test]
    fn test_pick_single_question() {
        let questions = ids(&["only"]);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            pick_question(&questions, &mut rng),
            Some(&QuestionId::new("only"))
        );
    }

    #[test]
    fn test_pick_always_returns_a_member() {
        let questions = ids(&["q1", "q2", "q3"]);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let picked = pick_question(&questions, &mut rng).unwrap();
            assert!(questions.contains(picked));
        }
    }

    #[test]
    fn test_pick_is_statistically_uniform() {
        // Chi-square goodness-of-fit over 3000 trials, N = 3.
        // Critical value for 2 degrees of freedom at p = 0.001 is 13.82.
        let questions = ids(&["q1", "q2", "q3"]);
        let trials = 3000usize;
        let mut rng = StdRng::seed_from_u64(20240917);
        let mut counts: HashMap<&QuestionId, usize> = HashMap::new();

        for _ in 0..trials {
            let picked = pick_question(&questions, &mut rng).unwrap();
            *counts.entry(picked).or_default() += 1;
        }

        assert_eq!(counts.len(), questions.len(), "every question was picked");

        let expected = trials as f64 / questions.len() as f64;
        let chi_square: f64 = counts
            .values()
            .map(|&observed| {
                let diff = observed as f64 - expected;
                diff * diff / expected
            })
            .sum();

        assert!(
            chi_square < 13.82,
            "pick distribution is not uniform (chi-square = {chi_square:.2}, counts = {counts:?})"
        );
    }
}
