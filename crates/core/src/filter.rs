//! Substring filtering over entity collections.
//!
//! A search is a list of [`Criterion`]s. Each one selects a string field and carries an optional
//! term. Criteria without a usable term are skipped; the rest must all match (logical AND) using
//! case-sensitive substring containment. Input order is preserved.
//!
//! The engine never treats an empty result as an error. Turning "nothing matched" into a
//! not-found response is left to the HTTP boundary.

/// Selects the string field a criterion is matched against.
///
/// `None` means the entity has no value for that field, which never matches an active term.
pub type FieldSelector<T> = fn(&T) -> Option<&str>;

/// One optional filter on one field.
pub struct Criterion<'a, T> {
    field: FieldSelector<T>,
    term: Option<&'a str>,
}

impl<'a, T> Criterion<'a, T> {
    pub fn new(field: FieldSelector<T>, term: Option<&'a str>) -> Self {
        Self { field, term }
    }

    /// The term to search for, if this criterion is active.
    ///
    /// Empty and whitespace-only terms count as absent.
    fn active_term(&self) -> Option<&'a str> {
        self.term.filter(|t| !t.trim().is_empty())
    }

    fn matches(&self, term: &str, item: &T) -> bool {
        (self.field)(item).is_some_and(|value| value.contains(term))
    }
}

/// Returns true if `item` satisfies every active criterion.
pub fn matches_all<T>(item: &T, criteria: &[Criterion<'_, T>]) -> bool {
    criteria.iter().all(|criterion| match criterion.active_term() {
        Some(term) => criterion.matches(term, item),
        None => true,
    })
}

/// Returns the items that satisfy every active criterion, in input order.
pub fn filter<'i, T, I>(items: I, criteria: &[Criterion<'_, T>]) -> Vec<T>
where
    T: Clone + 'i,
    I: IntoIterator<Item = &'i T>,
{
    items
        .into_iter()
        .filter(|item| matches_all(*item, criteria))
        .cloned()
        .collect()
}
