// crates/shared-kernel/src/infrastructure/concurrency/mod.rs

mod cancellation;
mod singleflight;

pub use cancellation::with_cancellation;
pub use singleflight::Singleflight;

#[cfg(test)]
mod cancellation_test;
