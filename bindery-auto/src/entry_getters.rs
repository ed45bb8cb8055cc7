use bindery::TypeDef;

pub use linkme::{self, distributed_slice};

#[distributed_slice]
pub static __TYPE_DEFS: [fn() -> TypeDef];
