//! Media metadata types and normalization of prober output.

pub mod probe;

pub use probe::VideoProbe;
