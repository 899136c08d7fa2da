// crates/location/tests/infrastructure/repository_it_for_vehicle_cache.rs

use location::domain::builders::VehicleBuilder;
use location::domain::entities::Driver;
use location::domain::repositories::VehicleRepository;
use location::domain::value_objects::VehicleId;
use location::infrastructure::redis::CachedVehicleRepository;
use shared_kernel::domain::repositories::CacheRepository;
use shared_kernel::infrastructure::redis::utils::RedisTestContext;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_vehicle_cache_lifecycle() {
    // Arrange
    let ctx = RedisTestContext::builder().build().await;
    let cache = ctx.repository();
    let repo = CachedVehicleRepository::new(cache.clone());
    let id = VehicleId::try_new("v1").unwrap();
    let vehicle = VehicleBuilder::new(id.clone(), "u1")
        .with_name("Clio")
        .with_plate("AB-123-CD")
        .with_seats(4)
        .with_driver(Driver::new("u1", "Jane", "jane", "jane@example.com", ""))
        .build();

    // Act + Assert : save / get
    repo.save(&vehicle).await.expect("Save failed");
    assert_eq!(repo.get(&id).await.unwrap(), vehicle);
    assert!(cache.exists("vehicle:v1").await.unwrap());

    // Delete (idempotent)
    repo.delete(&id).await.unwrap();
    repo.delete(&id).await.unwrap();
    assert!(repo.get(&id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_expired_entry_looks_absent() {
    let ctx = RedisTestContext::builder().build().await;
    let repo = CachedVehicleRepository::new(ctx.repository()).with_ttl(Duration::from_secs(1));
    let id = VehicleId::try_new("v1").unwrap();

    repo.save(&VehicleBuilder::new(id.clone(), "u1").build()).await.unwrap();
    tokio::time::sleep(Duration::from_millis(1_500)).await;

    assert!(repo.get(&id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_raw_cache_repository_set_get_delete() {
    let ctx = RedisTestContext::builder().build().await;
    let cache: Arc<dyn CacheRepository> = ctx.repository();

    cache.set("k", "v", None).await.unwrap();
    assert_eq!(cache.get("k").await.unwrap().as_deref(), Some("v"));

    cache.delete("k").await.unwrap();
    assert_eq!(cache.get("k").await.unwrap(), None);
    assert!(!cache.exists("k").await.unwrap());
}
