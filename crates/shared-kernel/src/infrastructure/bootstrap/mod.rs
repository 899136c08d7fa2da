// crates/shared-kernel/src/infrastructure/bootstrap/mod.rs

mod initializers;

pub use initializers::{run_initializers, Initializer};
