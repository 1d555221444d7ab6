//! Pure query logic over an in-memory snapshot of the question catalog.
//!
//! Everything here is synchronous and side-effect free: the caller fetches an
//! ordered snapshot from the database and these functions slice, filter, or
//! draw from it. Randomness is injected so callers (and tests) control the
//! source.

use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

use crate::models::Question;

pub const QUESTIONS_PER_PAGE: usize = 10;

/// Returns the 1-based page `page_number` of `items` as a contiguous slice.
///
/// Pages are fixed at [`QUESTIONS_PER_PAGE`] items. A page past the end is an
/// empty slice, never an error; whether that counts as "not found" is the
/// caller's call. Page 0 is treated as page 1.
pub fn paginate<T>(items: &[T], page_number: usize) -> &[T] {
    let start = page_number
        .max(1)
        .saturating_sub(1)
        .saturating_mul(QUESTIONS_PER_PAGE);
    if start >= items.len() {
        return &[];
    }
    let end = (start + QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}

/// Retains questions whose category matches exactly, preserving order.
pub fn filter_by_category(items: &[Question], category_id: i64) -> Vec<Question> {
    items
        .iter()
        .filter(|q| q.category_id == category_id)
        .cloned()
        .collect()
}

/// Retains questions whose text contains `term`, case-insensitively,
/// preserving order. Callers only invoke this with a non-empty term; an
/// empty term would trivially match everything.
pub fn filter_by_text(items: &[Question], term: &str) -> Vec<Question> {
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|q| q.text.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// The category scope of a quiz round. The wire encodes "all categories" as
/// category id 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    All,
    Category(i64),
}

impl QuizScope {
    pub fn from_wire(category_id: i64) -> Self {
        if category_id == 0 {
            QuizScope::All
        } else {
            QuizScope::Category(category_id)
        }
    }

    fn matches(&self, question: &Question) -> bool {
        match self {
            QuizScope::All => true,
            QuizScope::Category(id) => question.category_id == *id,
        }
    }
}

/// Draws one unseen question uniformly at random from the scoped pool.
///
/// Returns `None` when every scoped question is in `previous_ids` — the quiz
/// is complete. That is a normal terminal value, not a failure.
pub fn next_question<R: Rng + ?Sized>(
    snapshot: &[Question],
    scope: QuizScope,
    previous_ids: &HashSet<i64>,
    rng: &mut R,
) -> Option<Question> {
    let pool: Vec<&Question> = snapshot
        .iter()
        .filter(|q| scope.matches(q) && !previous_ids.contains(&q.id))
        .collect();

    pool.choose(rng).map(|q| (*q).clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn question(id: i64, category_id: i64, text: &str) -> Question {
        Question {
            id,
            text: text.to_string(),
            answer: format!("answer {id}"),
            category_id,
            difficulty: 1,
        }
    }

    fn pool(count: i64, category_id: i64) -> Vec<Question> {
        (1..=count)
            .map(|id| question(id, category_id, &format!("question {id}")))
            .collect()
    }

    #[test]
    fn test_paginate_slices_and_clips() {
        let items: Vec<i64> = (1..=25).collect();

        assert_eq!(paginate(&items, 1), (1..=10).collect::<Vec<_>>());
        assert_eq!(paginate(&items, 2), (11..=20).collect::<Vec<_>>());
        assert_eq!(paginate(&items, 3), (21..=25).collect::<Vec<_>>());
        assert!(paginate(&items, 4).is_empty());
        assert!(paginate(&items, 1000).is_empty());
    }

    #[test]
    fn test_paginate_page_size_bound() {
        let items: Vec<i64> = (1..=95).collect();
        for page in 1..=12 {
            assert!(paginate(&items, page).len() <= QUESTIONS_PER_PAGE);
        }
    }

    #[test]
    fn test_paginate_edge_pages() {
        let empty: Vec<i64> = Vec::new();
        assert!(paginate(&empty, 1).is_empty());

        // Page 0 is treated as the first page.
        let items: Vec<i64> = (1..=3).collect();
        assert_eq!(paginate(&items, 0), paginate(&items, 1));
    }

    #[test]
    fn test_filter_by_category_soundness_and_order() {
        let items = vec![
            question(1, 4, "a"),
            question(2, 2, "b"),
            question(3, 4, "c"),
            question(4, 1, "d"),
            question(5, 4, "e"),
        ];

        let filtered = filter_by_category(&items, 4);
        assert!(filtered.iter().all(|q| q.category_id == 4));
        let ids: Vec<i64> = filtered.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 3, 5]);

        assert!(filter_by_category(&items, 9).is_empty());
    }

    #[test]
    fn test_filter_by_text_case_insensitive() {
        let items = vec![question(1, 2, "Apple Pie")];

        let hits = filter_by_text(&items, "apple");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].text, "Apple Pie");

        assert!(filter_by_text(&items, "xyz").is_empty());
    }

    #[test]
    fn test_filter_by_text_preserves_order() {
        let items = vec![
            question(1, 1, "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?"),
            question(2, 1, "What is the heaviest organ in the human body?"),
            question(3, 1, "Who discovered penicillin?"),
            question(4, 1, "Who invented Peanut Butter?"),
        ];

        let ids: Vec<i64> = filter_by_text(&items, "who")
            .iter()
            .map(|q| q.id)
            .collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_next_question_respects_exclusions() {
        let snapshot = pool(5, 4);
        let mut rng = StdRng::seed_from_u64(7);
        let mut previous = HashSet::new();

        for _ in 0..5 {
            let drawn =
                next_question(&snapshot, QuizScope::Category(4), &previous, &mut rng).unwrap();
            assert!(!previous.contains(&drawn.id));
            previous.insert(drawn.id);
        }

        // All five seen: the quiz is complete.
        assert_eq!(
            next_question(&snapshot, QuizScope::Category(4), &previous, &mut rng),
            None
        );
    }

    #[test]
    fn test_next_question_exhausted_category_pool() {
        let snapshot = pool(3, 4);
        let previous: HashSet<i64> = [1, 2, 3].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(
            next_question(&snapshot, QuizScope::Category(4), &previous, &mut rng),
            None
        );
    }

    #[test]
    fn test_next_question_scope() {
        let mut snapshot = pool(3, 1);
        snapshot.push(question(4, 2, "only one in category 2"));
        let previous = HashSet::new();
        let mut rng = StdRng::seed_from_u64(11);

        let drawn =
            next_question(&snapshot, QuizScope::Category(2), &previous, &mut rng).unwrap();
        assert_eq!(drawn.id, 4);

        // Scope `All` may draw from any category.
        let drawn = next_question(&snapshot, QuizScope::All, &previous, &mut rng).unwrap();
        assert!((1..=4).contains(&drawn.id));
    }

    #[test]
    fn test_next_question_covers_whole_pool() {
        let snapshot = pool(5, 1);
        let previous = HashSet::new();
        let mut rng = StdRng::seed_from_u64(42);

        let mut seen = HashSet::new();
        for _ in 0..1000 {
            let drawn = next_question(&snapshot, QuizScope::All, &previous, &mut rng).unwrap();
            seen.insert(drawn.id);
        }
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn test_next_question_deterministic_with_seeded_rng() {
        let snapshot = pool(20, 1);
        let previous = HashSet::new();

        let mut first = StdRng::seed_from_u64(99);
        let mut second = StdRng::seed_from_u64(99);
        assert_eq!(
            next_question(&snapshot, QuizScope::All, &previous, &mut first),
            next_question(&snapshot, QuizScope::All, &previous, &mut second)
        );
    }

    #[test]
    fn test_filter_then_paginate_end_to_end() {
        let snapshot = pool(12, 4);

        let page = paginate(&filter_by_category(&snapshot, 4), 2).to_vec();
        let ids: Vec<i64> = page.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![11, 12]);
    }

    #[test]
    fn test_quiz_scope_wire_encoding() {
        assert_eq!(QuizScope::from_wire(0), QuizScope::All);
        assert_eq!(QuizScope::from_wire(3), QuizScope::Category(3));
    }
}
