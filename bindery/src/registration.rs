use crate::{any::TypeInfo, catalog::Catalog};

/// Lifetime a caller chooses for a bulk registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Lifetime {
    /// One instance for the lifetime of the container.
    Singleton,
    /// One instance per unit of work.
    Scoped,
    /// A fresh instance per resolution.
    Transient,
}

impl Lifetime {
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Lifetime::Singleton => "singleton",
            Lifetime::Scoped => "scoped",
            Lifetime::Transient => "transient",
        }
    }
}

/// The host container's single-binding registration primitive.
///
/// The engine hands bindings over in catalog order and assumes, but doesn't enforce,
/// that the container resolves repeated registrations of one service type by
/// "last registration wins".
pub trait BindingContainer {
    type Error;

    /// # Errors
    /// Whatever the host container reports; never retried here.
    fn register(&mut self, service: TypeInfo, implementation: TypeInfo, lifetime: Lifetime) -> Result<(), Self::Error>;
}

impl<F> BindingContainer for F
where
    F: FnMut(TypeInfo, TypeInfo, Lifetime) -> Result<(), anyhow::Error>,
{
    type Error = anyhow::Error;

    #[inline]
    fn register(&mut self, service: TypeInfo, implementation: TypeInfo, lifetime: Lifetime) -> Result<(), Self::Error> {
        self(service, implementation, lifetime)
    }
}

/// Registers every catalog entry into the container with the given lifetime, in catalog order.
///
/// # Errors
/// The first host failure is propagated unchanged and registration stops at that entry.
/// The container is left in whatever partial state the host left it in; a caller that
/// needs atomicity should snapshot the container beforehand.
pub fn register_all<C>(catalog: &Catalog, container: &mut C, lifetime: Lifetime) -> Result<(), C::Error>
where
    C: BindingContainer + ?Sized,
{
    for binding in catalog {
        container.register(binding.service_type, binding.implementation_type, lifetime)?;
    }
    Ok(())
}

/// [`register_all`] with [`Lifetime::Singleton`].
///
/// # Errors
/// See [`register_all`].
pub fn register_all_singleton<C>(catalog: &Catalog, container: &mut C) -> Result<(), C::Error>
where
    C: BindingContainer + ?Sized,
{
    register_all(catalog, container, Lifetime::Singleton)
}

/// [`register_all`] with [`Lifetime::Scoped`].
///
/// # Errors
/// See [`register_all`].
pub fn register_all_scoped<C>(catalog: &Catalog, container: &mut C) -> Result<(), C::Error>
where
    C: BindingContainer + ?Sized,
{
    register_all(catalog, container, Lifetime::Scoped)
}

/// [`register_all`] with [`Lifetime::Transient`].
///
/// # Errors
/// See [`register_all`].
pub fn register_all_transient<C>(catalog: &Catalog, container: &mut C) -> Result<(), C::Error>
where
    C: BindingContainer + ?Sized,
{
    register_all(catalog, container, Lifetime::Transient)
}

#[cfg(test)]
mod tests {
    use super::{register_all, register_all_transient, Lifetime};
    use crate::{any::TypeInfo, hierarchy::TypeDef, marker::BindingPolicy, Scanner, TypeGraph};

    use alloc::{string::ToString as _, vec::Vec};

    trait Cache {}

    struct RedisCache;
    struct MokaCache;

    fn catalog() -> crate::Catalog {
        let graph = TypeGraph::builder()
            .register(TypeDef::interface::<dyn Cache>().marked(BindingPolicy::Decorated))
            .register(TypeDef::concrete::<RedisCache>().implements::<dyn Cache>())
            .register(TypeDef::concrete::<MokaCache>().implements::<dyn Cache>())
            .build();
        Scanner::new().scan(&graph).unwrap()
    }

    #[test]
    fn test_register_all_in_catalog_order() {
        let catalog = catalog();
        let mut registered = Vec::new();
        {
            let mut container = |service: TypeInfo, implementation: TypeInfo, lifetime: Lifetime| -> anyhow::Result<()> {
                registered.push((service, implementation, lifetime));
                Ok(())
            };
            register_all(&catalog, &mut container, Lifetime::Singleton).unwrap();
        }

        assert_eq!(registered.len(), 2);
        assert_eq!(registered[0].1, TypeInfo::of::<RedisCache>());
        assert_eq!(registered[1].1, TypeInfo::of::<MokaCache>());
        assert!(registered.iter().all(|(_, _, lifetime)| *lifetime == Lifetime::Singleton));
    }

    #[test]
    fn test_host_failure_stops_registration() {
        let catalog = catalog();
        let mut calls = 0_usize;
        let err = {
            let mut container = |_: TypeInfo, _: TypeInfo, _: Lifetime| -> anyhow::Result<()> {
                calls += 1;
                Err(anyhow::anyhow!("container is sealed"))
            };
            register_all_transient(&catalog, &mut container).unwrap_err()
        };

        assert_eq!(calls, 1);
        assert_eq!(err.to_string(), "container is sealed");
    }

    #[test]
    fn test_lifetime_names() {
        assert_eq!(Lifetime::Singleton.name(), "singleton");
        assert_eq!(Lifetime::Scoped.name(), "scoped");
        assert_eq!(Lifetime::Transient.name(), "transient");
    }
}
