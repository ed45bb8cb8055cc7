/// Builds a [`TypeGraph`](crate::TypeGraph) from a declarative list of type definitions.
///
/// # Examples
/// ```rust
/// use bindery::{type_graph, BindingPolicy, TypeDef};
///
/// trait UserRepo {}
///
/// struct PostgresUserRepo;
///
/// let graph = type_graph![
///     TypeDef::interface::<dyn UserRepo>().marked(BindingPolicy::Decorated),
///     TypeDef::concrete::<PostgresUserRepo>().implements::<dyn UserRepo>(),
/// ];
/// assert_eq!(graph.len(), 2);
/// ```
#[macro_export]
macro_rules! type_graph {
    ( $( $def:expr ),* $(,)? ) => {{
        let builder = $crate::TypeGraph::builder();
        $( let builder = builder.register($def); )*
        builder.build()
    }};
}

#[cfg(test)]
mod tests {
    use crate::{any::TypeInfo, BindingPolicy, TypeDef};

    trait Clock {}

    struct SystemClock;

    #[test]
    fn test_type_graph_macro() {
        let graph = type_graph![
            TypeDef::interface::<dyn Clock>().marked(BindingPolicy::Decorated),
            TypeDef::concrete::<SystemClock>().implements::<dyn Clock>(),
        ];

        assert_eq!(graph.len(), 2);
        assert!(graph.is_assignable(TypeInfo::of::<SystemClock>(), TypeInfo::of::<dyn Clock>()));
    }

    #[test]
    fn test_empty_type_graph_macro() {
        let graph = type_graph![];
        assert!(graph.is_empty());
    }
}
