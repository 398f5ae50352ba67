use std::collections::HashMap;

use crate::ast::Node;
use crate::error::ImplementationError;

/// Identifies a grammar rule procedure for memoization purposes.
///
/// Generated code assigns each rule a distinct id (commonly just the
/// rule's ordinal in the grammar); two rule procedures sharing an id is an
/// [`ImplementationError`](crate::error::ImplementationError), not a parse-time
/// failure, since it is a property of the wiring, not of any particular input.
pub type RuleId = u32;

/// One memoized outcome: what rule `r`, started at position `mark`,
/// produced (`None` = the rule failed at that position — negative caching),
/// and the mark the cursor should advance to on a hit.
#[derive(Clone)]
struct MemoEntry<'a> {
    result: Option<Node<'a>>,
    post_mark: usize,
}

/// `(mark, rule) -> MemoEntry` table realizing the per-position memo chain
/// described by the data model as a single hash map rather than a literal
/// linked list threaded through each token — the two are observationally
/// identical (at most one entry per key, O(1) find/insert/update, no
/// eviction) and the map sidesteps unsafe intrusive-list bookkeeping.
#[derive(Default)]
pub struct MemoTable<'a> {
    entries: HashMap<(usize, RuleId), MemoEntry<'a>>,
    max_parsed_mark: usize,
}

impl<'a> MemoTable<'a> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            max_parsed_mark: 0,
        }
    }

    /// Look up a previously memoized result for `(mark, rule_id)`.
    pub fn find(&self, mark: usize, rule_id: RuleId) -> Option<(Option<Node<'a>>, usize)> {
        self.entries
            .get(&(mark, rule_id))
            .map(|e| (e.result, e.post_mark))
    }

    /// Install the seed (first) memo entry for `(mark, rule_id)`.
    pub fn insert_memo(
        &mut self,
        mark: usize,
        rule_id: RuleId,
        result: Option<Node<'a>>,
        post_mark: usize,
    ) {
        self.max_parsed_mark = self.max_parsed_mark.max(mark);
        if result.is_some() {
            self.max_parsed_mark = self.max_parsed_mark.max(post_mark);
        }
        self.entries
            .insert((mark, rule_id), MemoEntry { result, post_mark });
    }

    /// Overwrite an existing entry with a grown left-recursive result.
    /// Used exclusively by the seed/grow left-recursion protocol; calling
    /// this on a key with no existing seed is a logic error in the rule
    /// procedure, not a condition this table needs to guard against.
    pub fn update_memo(
        &mut self,
        mark: usize,
        rule_id: RuleId,
        result: Option<Node<'a>>,
        post_mark: usize,
    ) {
        self.insert_memo(mark, rule_id, result, post_mark);
    }

    /// Furthest position any rule has successfully consumed up to, used to
    /// anchor the "unexpected token" diagnostic at the point parsing got
    /// furthest before failing.
    pub fn max_parsed_mark(&self) -> usize {
        self.max_parsed_mark
    }
}

/// Maps rule names to the [`RuleId`]s generated/glue code assigns them,
/// catching the one wiring defect that is a property of the grammar rather
/// than of any particular input: two rule procedures registered under the
/// same id. This is detected once, at registry-construction time, not
/// rediscovered on every parse.
#[derive(Default)]
pub struct RuleRegistry {
    names: HashMap<RuleId, &'static str>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` under `id`. Re-registering the same `(id, name)` pair
    /// is a no-op; registering a second, different name under an id already
    /// taken is an [`ImplementationError`].
    pub fn register(&mut self, id: RuleId, name: &'static str) -> Result<(), ImplementationError> {
        match self.names.get(&id) {
            Some(existing) if *existing != name => Err(ImplementationError::new(
                "RuleRegistry::register",
                format!(
                    "rule id {} already registered as `{}`, cannot reassign to `{}`",
                    id, existing, name
                ),
            )),
            _ => {
                self.names.insert(id, name);
                Ok(())
            }
        }
    }

    pub fn name_of(&self, id: RuleId) -> Option<&'static str> {
        self.names.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod registry_tests {
    use super::*;

    #[test]
    fn registering_distinct_ids_succeeds() {
        let mut registry = RuleRegistry::new();
        registry.register(1, "atom").unwrap();
        registry.register(2, "comparison").unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.name_of(1), Some("atom"));
    }

    #[test]
    fn reassigning_an_id_to_a_different_name_is_an_error() {
        let mut registry = RuleRegistry::new();
        registry.register(1, "atom").unwrap();
        let err = registry.register(1, "comparison").unwrap_err();
        assert!(err.to_string().contains("already registered"));
    }

    #[test]
    fn re_registering_the_same_name_is_idempotent() {
        let mut registry = RuleRegistry::new();
        registry.register(1, "atom").unwrap();
        registry.register(1, "atom").unwrap();
        assert_eq!(registry.len(), 1);
    }
}
