use bindery::{utils::Merge as _, TypeGraphBuilder};

use crate::entry_getters::__TYPE_DEFS;

/// Folds every type definition self-registered at static-initialization time into
/// the builder, so an application composes its graph without listing each module.
pub trait AutoTypes {
    #[must_use]
    fn provide_auto_types(self) -> Self;
}

impl AutoTypes for TypeGraphBuilder {
    #[inline]
    fn provide_auto_types(self) -> Self {
        __TYPE_DEFS.iter().fold(self, |builder, getter| builder.merge(getter()))
    }
}
