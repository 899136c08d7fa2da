mod redis_cache_repository;

pub use redis_cache_repository::RedisCacheRepository;
