// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use super::implementation::JoinShape;
use indexmap::IndexMap;
use std::collections::BTreeMap;
use std::hash::Hash;

/// Output shape for ordered sequences: values stay at their source's index.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sequence;

impl<T> JoinShape<T> for Sequence {
    type Output = Vec<T>;

    fn assemble(self, values: Vec<T>) -> Vec<T> {
        values
    }
}

/// Output shape for insertion-ordered keyed sources.
#[derive(Debug, Clone)]
pub struct Keyed<K>(pub(crate) Vec<K>);

impl<K, T> JoinShape<T> for Keyed<K>
where
    K: Hash + Eq,
{
    type Output = IndexMap<K, T>;

    fn assemble(self, values: Vec<T>) -> IndexMap<K, T> {
        self.0.into_iter().zip(values).collect()
    }
}

/// Output shape for key-ordered sources.
#[derive(Debug, Clone)]
pub struct SortedKeyed<K>(pub(crate) Vec<K>);

impl<K, T> JoinShape<T> for SortedKeyed<K>
where
    K: Ord,
{
    type Output = BTreeMap<K, T>;

    fn assemble(self, values: Vec<T>) -> BTreeMap<K, T> {
        self.0.into_iter().zip(values).collect()
    }
}

/// Sources to join, tagged with the shape the aggregate should take.
///
/// Useful when the shape is only known at runtime; when it is known statically,
/// join the `IndexMap` or `Vec` directly.
#[derive(Debug, Clone)]
pub enum SourceCollection<K, S> {
    /// Sources addressed by unique key, in insertion order.
    Keyed(IndexMap<K, S>),
    /// Sources addressed by position.
    Indexed(Vec<S>),
}

/// Aggregate produced by joining a [`SourceCollection`]; always the same variant as the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Aggregate<K: Hash + Eq, T> {
    /// One value per key, in the input's key order.
    Keyed(IndexMap<K, T>),
    /// One value per position.
    Indexed(Vec<T>),
}

impl<K: Hash + Eq, T> Aggregate<K, T> {
    /// Returns the keyed values, or `None` for an indexed aggregate.
    pub fn into_keyed(self) -> Option<IndexMap<K, T>> {
        match self {
            Self::Keyed(values) => Some(values),
            Self::Indexed(_) => None,
        }
    }

    /// Returns the indexed values, or `None` for a keyed aggregate.
    pub fn into_indexed(self) -> Option<Vec<T>> {
        match self {
            Self::Keyed(_) => None,
            Self::Indexed(values) => Some(values),
        }
    }

    /// Number of joined values.
    pub fn len(&self) -> usize {
        match self {
            Self::Keyed(values) => values.len(),
            Self::Indexed(values) => values.len(),
        }
    }

    /// Returns `true` if no sources were joined.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Output shape for a [`SourceCollection`].
#[derive(Debug, Clone)]
pub enum Tagged<K> {
    /// Keys of a keyed collection, in order.
    Keyed(Vec<K>),
    /// Marker for an indexed collection.
    Indexed,
}

impl<K, T> JoinShape<T> for Tagged<K>
where
    K: Hash + Eq,
{
    type Output = Aggregate<K, T>;

    fn assemble(self, values: Vec<T>) -> Aggregate<K, T> {
        match self {
            Self::Keyed(keys) => Aggregate::Keyed(JoinShape::<T>::assemble(Keyed(keys), values)),
            Self::Indexed => Aggregate::Indexed(values),
        }
    }
}
