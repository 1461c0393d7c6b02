//! Candidate filtering
//!
//! Selects the solution words still consistent with a constraint. Results are
//! cached by encoded constraint, and a cached entry is always the filter of the
//! full solution list, whatever list the scan started from.

use super::cache::{CandidateCache, CandidateIndices};
use crate::core::{GameConstraint, Word};

/// Filter `base` down to the words that fit `constraint`, preserving order
///
/// Uncached; use [`CandidateFilter`] for repeated lookups.
#[must_use]
pub fn filter_words<'a>(constraint: &GameConstraint, base: &'a [Word]) -> Vec<&'a Word> {
    base.iter()
        .filter(|word| constraint.word_fits(word))
        .collect()
}

/// Words from the solution list that fit a constraint
#[derive(Debug, Clone)]
pub struct Candidates<'a> {
    words: &'a [Word],
    indices: CandidateIndices,
    constraint: GameConstraint,
}

impl<'a> Candidates<'a> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The constraint these candidates satisfy
    #[must_use]
    pub const fn constraint(&self) -> &GameConstraint {
        &self.constraint
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Word> + '_ {
        let words = self.words;
        self.indices.iter().map(move |&i| &words[i as usize])
    }

    #[must_use]
    pub fn first(&self) -> Option<&'a Word> {
        let words = self.words;
        self.indices.first().map(|&i| &words[i as usize])
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.iter().any(|word| word.text() == text)
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<&'a Word> {
        self.iter().collect()
    }

    #[must_use]
    pub fn texts(&self) -> Vec<&'a str> {
        self.iter().map(Word::text).collect()
    }
}

/// Cached candidate lookup over a fixed solution list
#[derive(Debug)]
pub struct CandidateFilter<'a> {
    solutions: &'a [Word],
    cache: CandidateCache,
}

impl<'a> CandidateFilter<'a> {
    #[must_use]
    pub fn new(solutions: &'a [Word]) -> Self {
        Self {
            solutions,
            cache: CandidateCache::new(),
        }
    }

    #[must_use]
    pub const fn solutions(&self) -> &'a [Word] {
        self.solutions
    }

    /// Solution words consistent with `constraint`
    #[must_use]
    pub fn candidates(&self, constraint: &GameConstraint) -> Candidates<'a> {
        let indices = self.cache.get_or_insert_with(constraint.encode(), || {
            scan(constraint, self.solutions, 0..self.solutions.len() as u32)
        });
        self.wrap(indices, *constraint)
    }

    /// Candidates for `constraint`, scanning only `parent`
    ///
    /// `constraint` must refine `parent.constraint()` with feedback from a word
    /// in `parent`; every word fitting `constraint` is then already in `parent`,
    /// so the cached result equals the full-list filter.
    pub(crate) fn narrow(
        &self,
        constraint: &GameConstraint,
        parent: &Candidates<'a>,
    ) -> Candidates<'a> {
        debug_assert_eq!(constraint.combine(parent.constraint()), *constraint);
        let indices = self.cache.get_or_insert_with(constraint.encode(), || {
            scan(constraint, self.solutions, parent.indices.iter().copied())
        });
        self.wrap(indices, *constraint)
    }

    /// Number of distinct constraints seen so far
    #[must_use]
    pub fn cached_constraints(&self) -> usize {
        self.cache.len()
    }

    fn wrap(&self, indices: CandidateIndices, constraint: GameConstraint) -> Candidates<'a> {
        Candidates {
            words: self.solutions,
            indices,
            constraint,
        }
    }
}

fn scan(
    constraint: &GameConstraint,
    solutions: &[Word],
    within: impl Iterator<Item = u32>,
) -> Vec<u32> {
    within
        .filter(|&i| constraint.word_fits(&solutions[i as usize]))
        .collect()
}
