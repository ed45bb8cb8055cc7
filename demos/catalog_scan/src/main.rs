use bindery::{
    register_all, type_graph,
    BindingPolicy::{Decorated, FirstGeneric},
    Lifetime, Scanner, TypeDef, TypeInfo,
};

// Service types the application exposes
trait UserRepo {}

trait EventHandler<E> {}

// Events
struct OrderPlaced;

// Implementations that should be picked up by the scan
struct PostgresUserRepo;

impl UserRepo for PostgresUserRepo {}

struct OrderPlacedHandler;

impl EventHandler<OrderPlaced> for OrderPlacedHandler {}

fn main() -> anyhow::Result<()> {
    // Describe the type universe once at startup. `dyn EventHandler<()>` stands for the
    // open generic declaration; the handler's edge closes it with the event type.
    let graph = type_graph![
        TypeDef::interface::<dyn UserRepo>().marked(Decorated),
        TypeDef::interface::<dyn EventHandler<()>>().generic(1).marked(FirstGeneric),
        TypeDef::concrete::<PostgresUserRepo>().implements::<dyn UserRepo>(),
        TypeDef::concrete::<OrderPlacedHandler>()
            .implements_closing::<dyn EventHandler<()>>([TypeInfo::of::<OrderPlaced>()]),
    ];

    let catalog = Scanner::new().scan(&graph)?;

    // Hand the bindings to a container. A real host would be an IoC container; printing
    // stands in for its registration primitive here.
    let mut container = |service: TypeInfo, implementation: TypeInfo, lifetime: Lifetime| -> anyhow::Result<()> {
        println!("{} -> {} [{}]", service.name, implementation.name, lifetime.name());
        Ok(())
    };
    register_all(&catalog, &mut container, Lifetime::Singleton)?;

    Ok(())
}
