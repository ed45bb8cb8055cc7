#![no_std]

mod registry;

pub mod entry_getters;

pub use registry::AutoTypes;
