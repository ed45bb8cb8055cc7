use alloc::{
    collections::{BTreeMap, BTreeSet},
    vec::Vec,
};
use core::{any::TypeId, slice};

use crate::{any::TypeInfo, hierarchy::TypeGraph};

/// A (service type, implementation type) pair intended for registration into a container.
///
/// The same service type may appear with several implementation types, and the same
/// implementation type may appear under several service types. Nothing is deduplicated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceBinding {
    pub service_type: TypeInfo,
    pub implementation_type: TypeInfo,
}

/// Ordered, duplicate-preserving result of a scan.
///
/// Entries appear in scan order, so a consumer forwarding them to a container with
/// "last registration wins" semantics gets deterministic conflict resolution.
/// Immutable once built; safe to share for concurrent reads.
///
/// The catalog holds type identities only. Assignability of each service type is
/// snapshotted at build time, so queries never touch the graph again.
#[derive(Debug)]
pub struct Catalog {
    bindings: Vec<ServiceBinding>,
    assignable: BTreeMap<TypeId, BTreeSet<TypeId>>,
}

impl Catalog {
    pub(crate) fn new() -> Self {
        Self {
            bindings: Vec::new(),
            assignable: BTreeMap::new(),
        }
    }

    pub(crate) fn append(&mut self, binding: ServiceBinding, graph: &TypeGraph) {
        self.assignable
            .entry(binding.service_type.id)
            .or_insert_with(|| graph.assignability_closure(binding.service_type.id));
        self.bindings.push(binding);
    }

    /// All bindings, in scan order.
    #[inline]
    #[must_use]
    pub fn all(&self) -> &[ServiceBinding] {
        &self.bindings
    }

    /// Bindings whose service type is `S` or assignable to `S`, preserving the relative
    /// order of [`Catalog::all`]. This is how a caller registers just certain types.
    #[must_use]
    pub fn of_service_type<S: ?Sized + 'static>(&self) -> Vec<ServiceBinding> {
        let target = TypeId::of::<S>();
        self.bindings
            .iter()
            .filter(|binding| {
                self.assignable
                    .get(&binding.service_type.id)
                    .is_some_and(|closure| closure.contains(&target))
            })
            .copied()
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, ServiceBinding> {
        self.bindings.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ServiceBinding;
    type IntoIter = slice::Iter<'a, ServiceBinding>;

    fn into_iter(self) -> Self::IntoIter {
        self.bindings.iter()
    }
}
