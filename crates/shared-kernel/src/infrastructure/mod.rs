// crates/shared-kernel/src/infrastructure/mod.rs

#[cfg(feature = "redis")]
pub mod redis;

pub mod bootstrap;

#[cfg(feature = "concurrency")]
pub mod concurrency;
