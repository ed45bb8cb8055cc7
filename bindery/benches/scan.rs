use bindery::{type_graph, BindingPolicy, Scanner, TypeDef, TypeInfo};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

trait Repo {}
trait Handler<E> {}

struct Created;
struct PgUserRepo;
struct PgOrderRepo;
struct CreatedHandler;

fn bench_scan(c: &mut Criterion) {
    let graph = type_graph![
        TypeDef::interface::<dyn Repo>().marked(BindingPolicy::Decorated),
        TypeDef::interface::<dyn Handler<()>>().generic(1).marked(BindingPolicy::FirstGeneric),
        TypeDef::concrete::<PgUserRepo>().implements::<dyn Repo>(),
        TypeDef::concrete::<PgOrderRepo>().implements::<dyn Repo>(),
        TypeDef::concrete::<CreatedHandler>().implements_closing::<dyn Handler<()>>([TypeInfo::of::<Created>()]),
    ];
    let scanner = Scanner::new();

    c.bench_function("scan", |b| b.iter(|| black_box(scanner.scan(black_box(&graph)).unwrap())));
}

criterion_group!(benches, bench_scan);
criterion_main!(benches);
