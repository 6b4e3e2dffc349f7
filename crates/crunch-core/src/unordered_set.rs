//! Deduplicating collection without ordering guarantees.

use std::{
    collections::{HashSet, hash_set},
    hash::Hash,
};

/// A set of unique elements with no iteration order.
///
/// Uniqueness follows `Eq`/`Hash` of the element type. Used for the cookies handed
/// to a renderer after a shuffle and for the legal swaps of a level.
///
/// # Examples
///
/// ```
/// use crunch_core::UnorderedSet;
///
/// let mut a = UnorderedSet::new();
/// assert!(a.insert(1));
/// assert!(!a.insert(1));
///
/// let b: UnorderedSet<_> = [2, 3].into_iter().collect();
/// let all = a.union(&b);
/// assert_eq!(all.len(), 3);
/// assert_eq!(a.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct UnorderedSet<T> {
    elements: HashSet<T>,
}

impl<T> PartialEq for UnorderedSet<T>
where
    T: Eq + Hash,
{
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T> Eq for UnorderedSet<T> where T: Eq + Hash {}

impl<T> Default for UnorderedSet<T> {
    fn default() -> Self {
        Self {
            elements: HashSet::new(),
        }
    }
}

impl<T> UnorderedSet<T>
where
    T: Eq + Hash,
{
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an element.
    ///
    /// Returns `false` if an equal element was already present, in which case the
    /// set is unchanged.
    pub fn insert(&mut self, element: T) -> bool {
        self.elements.insert(element)
    }

    /// Removes an element, returning whether it was present.
    pub fn remove(&mut self, element: &T) -> bool {
        self.elements.remove(element)
    }

    /// Returns `true` if an equal element is present.
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        self.elements.contains(element)
    }

    /// Returns a new set holding the elements of both sets.
    ///
    /// Neither operand is modified.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        self.elements.union(&other.elements).cloned().collect()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.elements.clear();
    }
}

impl<T> UnorderedSet<T> {
    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the set holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates over the elements in arbitrary order.
    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<T> FromIterator<T> for UnorderedSet<T>
where
    T: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for UnorderedSet<T>
where
    T: Eq + Hash,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T> IntoIterator for UnorderedSet<T> {
    type Item = T;
    type IntoIter = hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a UnorderedSet<T> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_insert_is_idempotent() {
        let mut set = UnorderedSet::new();
        assert!(set.is_empty());
        assert!(set.insert("a"));
        assert!(!set.insert("a"));
        assert_eq!(set.len(), 1);
        assert!(set.contains(&"a"));
    }

    #[test]
    fn test_remove() {
        let mut set: UnorderedSet<_> = [1, 2, 3].into_iter().collect();
        assert!(set.remove(&2));
        assert!(!set.remove(&2));
        assert!(!set.contains(&2));
        assert_eq!(set.len(), 2);

        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn test_iteration_visits_every_element_once() {
        let set: UnorderedSet<_> = [5, 1, 5, 3].into_iter().collect();
        let mut elements: Vec<_> = set.iter().copied().collect();
        elements.sort_unstable();
        assert_eq!(elements, [1, 3, 5]);

        let mut owned: Vec<_> = set.into_iter().collect();
        owned.sort_unstable();
        assert_eq!(owned, [1, 3, 5]);
    }

    proptest! {
        #[test]
        fn union_contains_both_operands(
            a in prop::collection::vec(0u8..32, 0..16),
            b in prop::collection::vec(0u8..32, 0..16),
        ) {
            let left: UnorderedSet<_> = a.iter().copied().collect();
            let right: UnorderedSet<_> = b.iter().copied().collect();
            let union = left.union(&right);

            for x in a.iter().chain(&b) {
                prop_assert!(union.contains(x));
            }
            for x in &union {
                prop_assert!(left.contains(x) || right.contains(x));
            }
            prop_assert_eq!(left.len(), a.iter().collect::<HashSet<_>>().len());
        }
    }
}
