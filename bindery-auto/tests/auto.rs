#![no_std]

use bindery::{BindingPolicy, Scanner, TypeDef, TypeGraph, TypeInfo};
use bindery_auto::{entry_getters::__TYPE_DEFS, AutoTypes as _};
use linkme::distributed_slice;

trait Repository {}

struct UserRepository;

fn repository_def() -> TypeDef {
    TypeDef::interface::<dyn Repository>().marked(BindingPolicy::Decorated)
}

fn user_repository_def() -> TypeDef {
    TypeDef::concrete::<UserRepository>().implements::<dyn Repository>()
}

#[distributed_slice(__TYPE_DEFS)]
static REPOSITORY_DEF: fn() -> TypeDef = repository_def;

#[distributed_slice(__TYPE_DEFS)]
static USER_REPOSITORY_DEF: fn() -> TypeDef = user_repository_def;

#[test]
fn test_entries_count() {
    assert_eq!(__TYPE_DEFS.len(), 2);
}

#[test]
fn test_scan_over_auto_registered_types() {
    let graph = TypeGraph::builder().provide_auto_types().build();
    let catalog = Scanner::new().scan(&graph).unwrap();

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.all()[0].service_type, TypeInfo::of::<dyn Repository>());
    assert_eq!(catalog.all()[0].implementation_type, TypeInfo::of::<UserRepository>());
}
