// crates/shared-kernel/src/infrastructure/redis/utils/mod.rs

#[cfg(feature = "test-utils")] mod redis_test_context;
#[cfg(feature = "test-utils")] mod redis_test_builder;

#[cfg(feature = "test-utils")] pub use redis_test_context::RedisTestContext;
#[cfg(feature = "test-utils")] pub use redis_test_builder::RedisTestContextBuilder;
