mod merge;

pub use merge::Merge;
