//! Keyed collection helpers
//!
//! Every entity slice is an `Arc<IdMap<V>>`. The helpers here never mutate the
//! prior map: a change produces a fresh `Arc`, and an operation that would not
//! change anything hands back the prior `Arc` so memoized selectors keep their
//! cache.

use indexmap::IndexMap;
use std::borrow::Cow;
use std::sync::Arc;

/// Mapping from a stable entity id to its value.
///
/// Insertion order is kept so that stable sorts over a collection have a
/// deterministic tie-break.
pub type IdMap<V> = IndexMap<String, V>;

/// A server-originated record with a stable key
pub trait Entity {
    /// Key the entity is stored under in its slice
    fn entity_key(&self) -> Cow<'_, str>;
}

/// Insert or overwrite a single entry
pub fn received_one<V: Clone>(prior: &Arc<IdMap<V>>, id: &str, value: V) -> Arc<IdMap<V>> {
    let mut next = IdMap::clone(prior);
    next.insert(id.to_string(), value);
    Arc::new(next)
}

/// Insert or overwrite a single entity under its own key.
///
/// An entity without a key is a decoding leftover and is ignored.
pub fn received_entity<V: Entity + Clone>(prior: &Arc<IdMap<V>>, entity: &V) -> Arc<IdMap<V>> {
    let key = entity.entity_key();
    if key.is_empty() {
        return Arc::clone(prior);
    }
    received_one(prior, &key, entity.clone())
}

/// Merge a batch into the map, batch entries win on conflict.
///
/// An empty batch returns `prior` unchanged.
pub fn received_many<V, I>(prior: &Arc<IdMap<V>>, batch: I) -> Arc<IdMap<V>>
where
    V: Clone,
    I: IntoIterator<Item = (String, V)>,
{
    let mut batch = batch.into_iter().peekable();
    if batch.peek().is_none() {
        return Arc::clone(prior);
    }

    let mut next = IdMap::clone(prior);
    next.extend(batch);
    Arc::new(next)
}

/// Merge a batch of entities keyed by their own key
pub fn received_entities<V: Entity + Clone>(prior: &Arc<IdMap<V>>, batch: &[V]) -> Arc<IdMap<V>> {
    received_many(prior, keyed_entries(batch))
}

/// Build a fresh map from a list of entities
pub fn index_entities<V: Entity + Clone>(items: &[V]) -> IdMap<V> {
    keyed_entries(items).collect()
}

fn keyed_entries<V: Entity + Clone>(items: &[V]) -> impl Iterator<Item = (String, V)> + '_ {
    items
        .iter()
        .map(|entity| (entity.entity_key().into_owned(), entity.clone()))
        .filter(|(key, _)| !key.is_empty())
}

/// Store `value` under `id` unless an equal value is already there.
///
/// An empty id is ignored.
pub fn received_if_changed<V: Clone + PartialEq>(
    prior: &Arc<IdMap<V>>,
    id: &str,
    value: V,
) -> Arc<IdMap<V>> {
    if id.is_empty() || prior.get(id) == Some(&value) {
        return Arc::clone(prior);
    }
    received_one(prior, id, value)
}

/// Apply `update` to every entry, keeping `prior` if nothing changed
pub fn update_all<V, F>(prior: &Arc<IdMap<V>>, mut update: F) -> Arc<IdMap<V>>
where
    V: Clone + PartialEq,
    F: FnMut(&str, &mut V),
{
    let mut next = IdMap::clone(prior);
    for (id, value) in next.iter_mut() {
        update(id.as_str(), value);
    }

    if next == **prior {
        Arc::clone(prior)
    } else {
        Arc::new(next)
    }
}

/// Apply `update` to the listed entries that exist, keeping `prior` if
/// nothing changed
pub fn update_each<'a, V, I, F>(prior: &Arc<IdMap<V>>, ids: I, mut update: F) -> Arc<IdMap<V>>
where
    V: Clone + PartialEq,
    I: IntoIterator<Item = &'a str>,
    F: FnMut(&mut V),
{
    let mut next: Option<IdMap<V>> = None;
    for id in ids {
        let Some(current) = prior.get(id) else {
            continue;
        };

        let mut value = current.clone();
        update(&mut value);
        if value != *current {
            next.get_or_insert_with(|| IdMap::clone(prior))
                .insert(id.to_string(), value);
        }
    }

    match next {
        Some(next) => Arc::new(next),
        None => Arc::clone(prior),
    }
}

/// Remove one key, keeping the order of the remaining entries
pub fn deleted<V: Clone>(prior: &Arc<IdMap<V>>, id: &str) -> Arc<IdMap<V>> {
    if !prior.contains_key(id) {
        return Arc::clone(prior);
    }

    let mut next = IdMap::clone(prior);
    next.shift_remove(id);
    Arc::new(next)
}

/// Remove every listed key that is present
pub fn deleted_many<'a, V, I>(prior: &Arc<IdMap<V>>, ids: I) -> Arc<IdMap<V>>
where
    V: Clone,
    I: IntoIterator<Item = &'a str>,
{
    let present: Vec<&str> = ids.into_iter().filter(|id| prior.contains_key(*id)).collect();
    if present.is_empty() {
        return Arc::clone(prior);
    }

    let mut next = IdMap::clone(prior);
    for id in present {
        next.shift_remove(id);
    }
    Arc::new(next)
}

/// Apply `update` to an existing entry. Missing keys leave the map untouched.
pub fn update_in<V, F>(prior: &Arc<IdMap<V>>, id: &str, update: F) -> Arc<IdMap<V>>
where
    V: Clone + PartialEq,
    F: FnOnce(&mut V),
{
    let Some(current) = prior.get(id) else {
        return Arc::clone(prior);
    };

    let mut value = current.clone();
    update(&mut value);
    if value == *current {
        return Arc::clone(prior);
    }

    let mut next = IdMap::clone(prior);
    next.insert(id.to_string(), value);
    Arc::new(next)
}

/// Replace the whole slice value, reusing `prior` when the content is equal
pub fn replace<T: PartialEq>(prior: &Arc<T>, value: T) -> Arc<T> {
    if **prior == value {
        Arc::clone(prior)
    } else {
        Arc::new(value)
    }
}

/// Reset a slice to its initial value
pub fn reset<T: Default + PartialEq>(prior: &Arc<T>) -> Arc<T> {
    replace(prior, T::default())
}

/// Remove one id from an ordered id list
pub fn remove_from_list(prior: &Arc<Vec<String>>, id: &str) -> Arc<Vec<String>> {
    if !prior.iter().any(|existing| existing == id) {
        return Arc::clone(prior);
    }

    Arc::new(
        prior
            .iter()
            .filter(|existing| existing.as_str() != id)
            .cloned()
            .collect(),
    )
}

/// Append ids that are not in the list yet, keeping first-seen order
pub fn append_unique(prior: &[String], ids: &[String]) -> Vec<String> {
    let mut merged = prior.to_vec();
    for id in ids {
        if !merged.contains(id) {
            merged.push(id.clone());
        }
    }
    merged
}
