use core::{
    any::{type_name, TypeId},
    cmp::Ordering,
};

/// Identity of a described type: its name and [`TypeId`].
///
/// Interfaces are denoted by their trait object type, so `TypeInfo::of::<dyn Repository>()`
/// and `TypeInfo::of::<PostgresUserRepo>()` are both valid identities. Equality and
/// ordering use the id alone; the name is only carried for diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct TypeInfo {
    pub name: &'static str,
    pub id: TypeId,
}

impl TypeInfo {
    #[inline]
    #[must_use]
    pub fn of<T>() -> Self
    where
        T: ?Sized + 'static,
    {
        Self {
            name: type_name::<T>(),
            id: TypeId::of::<T>(),
        }
    }

    /// Trailing path segment of the name, for terse trace events.
    #[inline]
    #[must_use]
    pub(crate) fn short_name(&self) -> &'static str {
        match self.name.rsplit_once("::") {
            Some((_, short)) => short,
            None => self.name,
        }
    }
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeInfo {}

impl PartialOrd for TypeInfo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TypeInfo {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}
