#![forbid(unsafe_code)]

//! The `EmptyList` type and its acquisition paths.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::OnceLock;

use thiserror::Error;

/// Element marker for the untyped shared singleton.
///
/// The shared acquisition path has no caller-requested element type, so
/// it is parameterized over this marker. Cross-type equality makes it
/// interchangeable with any `EmptyList<T>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Erased;

/// A read-only list of length zero.
///
/// Zero-sized: every `EmptyList<T>` is the same representation adapted
/// to the requested element type at the interface boundary only. There
/// is no mutation API; the `try_*` probes below exist for verification
/// and always fail.
pub struct EmptyList<T> {
    _elem: PhantomData<fn() -> T>,
}

/// The generic acquisition path: an empty list typed to `T`.
///
/// Allocation-free and `Copy`; the recommended way to obtain an empty
/// list.
#[inline]
pub const fn typed_empty<T>() -> EmptyList<T> {
    EmptyList::new()
}

/// The shared acquisition path: the process-wide singleton.
///
/// Repeated calls return the identical `&'static` instance. The
/// singleton is initialized at most once, even under concurrent first
/// access. Behaviorally indistinguishable from [`typed_empty`]; kept as
/// a distinct path for callers that want an identity-bearing value.
pub fn shared_empty() -> &'static EmptyList<Erased> {
    static SHARED: OnceLock<EmptyList<Erased>> = OnceLock::new();
    SHARED.get_or_init(EmptyList::new)
}

/// Report whether a mutation attempt against `list` is rejected.
///
/// Attempts to insert the supplied witness element and returns `true`
/// when the insert fails. Verification hook only; the list's observable
/// state is the same before and after the call.
pub fn is_immutable<T>(list: EmptyList<T>, witness: T) -> bool {
    list.try_insert(witness).is_err()
}

impl<T> EmptyList<T> {
    /// Create the empty list value.
    #[inline]
    pub const fn new() -> Self {
        Self { _elem: PhantomData }
    }

    /// Number of elements. Always 0.
    #[inline]
    pub const fn len(&self) -> usize {
        0
    }

    /// Always true.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        true
    }

    /// Element at `index`. Always `None`.
    #[inline]
    pub fn get(&self, _index: usize) -> Option<&T> {
        None
    }

    /// First element. Always `None`.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        None
    }

    /// Last element. Always `None`.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        None
    }

    /// Membership test. Always false.
    #[inline]
    pub fn contains(&self, _value: &T) -> bool {
        false
    }

    /// View as a slice. Always the empty slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &[]
    }

    /// Iterate over the elements (there are none).
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Re-type the empty list to another element type.
    ///
    /// Sound because there are no elements to convert; this is the
    /// interface-boundary adaptation of the single shared
    /// representation.
    #[inline]
    pub const fn cast<U>(&self) -> EmptyList<U> {
        EmptyList::new()
    }

    /// Mutation probe: attempt to insert an element.
    ///
    /// Always fails; the value is dropped and the list is unchanged.
    pub fn try_insert(&self, _value: T) -> Result<(), UnsupportedMutationError> {
        Err(UnsupportedMutationError::new(MutationKind::Insert))
    }

    /// Mutation probe: attempt to remove the element at `index`.
    ///
    /// Always fails.
    pub fn try_remove(&self, _index: usize) -> Result<T, UnsupportedMutationError> {
        Err(UnsupportedMutationError::new(MutationKind::Remove))
    }

    /// Mutation probe: attempt to clear the list.
    ///
    /// Always fails, even though a clear would be a no-op: the contract
    /// is that every mutation against the immutable list is rejected.
    pub fn try_clear(&self) -> Result<(), UnsupportedMutationError> {
        Err(UnsupportedMutationError::new(MutationKind::Clear))
    }
}

// Manual impls: derives would put unwanted bounds on `T`.

impl<T> Clone for EmptyList<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for EmptyList<T> {}

impl<T> Default for EmptyList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for EmptyList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().finish()
    }
}

impl<T> Hash for EmptyList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hash like an empty slice: length prefix only.
        state.write_usize(0);
    }
}

/// Shared and typed acquisition paths compare equal across any pair of
/// element types: an empty list has no element-type-dependent content.
impl<T, U> PartialEq<EmptyList<U>> for EmptyList<T> {
    #[inline]
    fn eq(&self, _other: &EmptyList<U>) -> bool {
        true
    }
}

impl<T> Eq for EmptyList<T> {}

/// Structural equality against an independently constructed collection:
/// equal iff the other side is empty.
impl<T, U> PartialEq<[U]> for EmptyList<T> {
    #[inline]
    fn eq(&self, other: &[U]) -> bool {
        other.is_empty()
    }
}

impl<T, U> PartialEq<&[U]> for EmptyList<T> {
    #[inline]
    fn eq(&self, other: &&[U]) -> bool {
        other.is_empty()
    }
}

impl<T, U> PartialEq<Vec<U>> for EmptyList<T> {
    #[inline]
    fn eq(&self, other: &Vec<U>) -> bool {
        other.is_empty()
    }
}

impl<T> IntoIterator for EmptyList<T> {
    type Item = T;
    type IntoIter = std::iter::Empty<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        std::iter::empty()
    }
}

impl<'a, T> IntoIterator for &'a EmptyList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The mutation that was attempted against an immutable list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationKind {
    Insert,
    Remove,
    Clear,
}

impl MutationKind {
    /// Lowercase operation name for messages.
    pub const fn as_str(self) -> &'static str {
        match self {
            MutationKind::Insert => "insert",
            MutationKind::Remove => "remove",
            MutationKind::Clear => "clear",
        }
    }
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A mutation was attempted against an immutable empty list.
///
/// Raised by every `try_*` probe. The rejection is deterministic and
/// leaves the list's observable state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("empty list is immutable: {kind} rejected")]
pub struct UnsupportedMutationError {
    kind: MutationKind,
}

impl UnsupportedMutationError {
    pub(crate) const fn new(kind: MutationKind) -> Self {
        Self { kind }
    }

    /// Which mutation was rejected.
    #[inline]
    pub const fn kind(&self) -> MutationKind {
        self.kind
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    //! `EmptyList` on the wire is an empty sequence, matching how an
    //! ordinary empty collection of the same logical type serializes.

    use std::fmt;
    use std::marker::PhantomData;

    use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
    use serde::ser::{Serialize, Serializer};

    use super::EmptyList;

    impl<T> Serialize for EmptyList<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            use serde::ser::SerializeSeq;
            let seq = serializer.serialize_seq(Some(0))?;
            seq.end()
        }
    }

    struct EmptyVisitor<T>(PhantomData<fn() -> T>);

    impl<'de, T> Visitor<'de> for EmptyVisitor<T> {
        type Value = EmptyList<T>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an empty sequence")
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            if seq.next_element::<de::IgnoredAny>()?.is_some() {
                return Err(de::Error::invalid_length(1, &self));
            }
            Ok(EmptyList::new())
        }
    }

    impl<'de, T> Deserialize<'de> for EmptyList<T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_seq(EmptyVisitor(PhantomData))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_and_typed_paths_are_equal() {
        assert_eq!(*shared_empty(), typed_empty::<i32>());
        assert_eq!(typed_empty::<String>(), *shared_empty());
        assert_eq!(typed_empty::<i32>(), typed_empty::<&str>());
    }

    #[test]
    fn shared_empty_is_one_instance() {
        let a: *const EmptyList<Erased> = shared_empty();
        let b: *const EmptyList<Erased> = shared_empty();
        assert_eq!(a, b);
    }

    #[test]
    fn size_is_always_zero() {
        assert_eq!(shared_empty().len(), 0);
        assert_eq!(typed_empty::<u8>().len(), 0);
        assert!(typed_empty::<u8>().is_empty());
    }

    #[test]
    fn equal_to_independently_constructed_empty_collections() {
        let list = typed_empty::<i32>();
        assert_eq!(list, Vec::<i32>::new());
        assert_eq!(list, &[] as &[i32]);
        assert_ne!(list, vec![1]);
    }

    #[test]
    fn reads_all_come_up_empty() {
        let list = typed_empty::<String>();
        assert!(list.get(0).is_none());
        assert!(list.first().is_none());
        assert!(list.last().is_none());
        assert!(!list.contains(&"x".to_string()));
        assert_eq!(list.iter().count(), 0);
        assert_eq!(list.into_iter().count(), 0);
        assert!(list.as_slice().is_empty());
    }

    #[test]
    fn mutation_probes_fail_without_state_change() {
        let list = typed_empty::<i32>();

        let err = list.try_insert(7).unwrap_err();
        assert_eq!(err.kind(), MutationKind::Insert);
        assert_eq!(list.len(), 0);

        let err = list.try_remove(0).unwrap_err();
        assert_eq!(err.kind(), MutationKind::Remove);
        assert_eq!(list.len(), 0);

        let err = list.try_clear().unwrap_err();
        assert_eq!(err.kind(), MutationKind::Clear);
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn both_acquisition_paths_are_immutable() {
        assert!(is_immutable(typed_empty::<i32>(), 1));
        assert!(is_immutable(*shared_empty(), Erased));
        assert_eq!(shared_empty().len(), 0);
    }

    #[test]
    fn cast_retypes_without_observable_change() {
        let list = shared_empty().cast::<u64>();
        assert_eq!(list.len(), 0);
        assert_eq!(list, *shared_empty());
    }

    #[test]
    fn debug_renders_like_an_empty_list() {
        assert_eq!(format!("{:?}", typed_empty::<i32>()), "[]");
    }

    #[test]
    fn error_message_names_the_operation() {
        let err = typed_empty::<i32>().try_insert(1).unwrap_err();
        assert_eq!(err.to_string(), "empty list is immutable: insert rejected");
    }

    #[test]
    fn hashes_like_an_empty_list_regardless_of_type() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        fn hash_of(value: &impl Hash) -> u64 {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }

        assert_eq!(hash_of(&typed_empty::<i32>()), hash_of(&typed_empty::<String>()));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_an_empty_sequence() {
        let json = serde_json::to_string(&typed_empty::<i32>()).unwrap();
        assert_eq!(json, "[]");

        let back: EmptyList<i32> = serde_json::from_str("[]").unwrap();
        assert_eq!(back, typed_empty::<i32>());

        let err = serde_json::from_str::<EmptyList<i32>>("[1]");
        assert!(err.is_err());
    }
}
