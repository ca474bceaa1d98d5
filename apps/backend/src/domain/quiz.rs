//! Quiz-pool selection rules.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::repos::questions::Question;

/// Category id meaning "draw from all categories".
pub const ALL_CATEGORIES: i32 = 0;

/// The stored-text category filter for a quiz round, or `None` for the
/// wildcard id.
pub fn category_filter(category_id: i32) -> Option<String> {
    (category_id != ALL_CATEGORIES).then(|| category_id.to_string())
}

/// Pick the next quiz question uniformly at random, or `None` once the pool
/// is exhausted. Exhaustion is a normal outcome, not an error.
pub fn draw_question<'a, R: Rng + ?Sized>(
    pool: &'a [Question],
    rng: &mut R,
) -> Option<&'a Question> {
    pool.choose(rng)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn question(id: i32) -> Question {
        Question {
            id,
            question: format!("question {id}"),
            answer: "answer".to_string(),
            difficulty: 1,
            category: "1".to_string(),
        }
    }

    #[test]
    fn test_category_filter_wildcard() {
        assert_eq!(category_filter(ALL_CATEGORIES), None);
        assert_eq!(category_filter(5), Some("5".to_string()));
    }

    #[test]
    fn test_draw_from_empty_pool_is_none() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(draw_question(&[], &mut rng).is_none());
    }

    #[test]
    fn test_draw_always_comes_from_pool() {
        let pool: Vec<Question> = (1..=5).map(question).collect();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let picked = draw_question(&pool, &mut rng).expect("pool is non-empty");
            assert!(pool.iter().any(|q| q.id == picked.id));
        }
    }

    #[test]
    fn test_draw_reaches_every_candidate() {
        let pool: Vec<Question> = (1..=3).map(question).collect();
        let mut rng = StdRng::seed_from_u64(42);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            seen.insert(draw_question(&pool, &mut rng).unwrap().id);
        }
        assert_eq!(seen.len(), pool.len());
    }
}
