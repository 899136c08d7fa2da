// crates/location/tests/infrastructure/repository_it_for_driver_location.rs

use location::domain::entities::DriverLocation;
use location::domain::repositories::LocationRepository;
use location::domain::value_objects::{DistanceUnit, SearchRadius, DEFAULT_SEARCH_LIMIT};
use location::infrastructure::redis::RedisLocationRepository;
use shared_kernel::domain::value_objects::GeoPoint;
use shared_kernel::errors::DomainError;
use shared_kernel::infrastructure::redis::utils::RedisTestContext;

async fn setup_context() -> (RedisLocationRepository, RedisTestContext) {
    let ctx = RedisTestContext::builder().build().await;

    let repo = RedisLocationRepository::new(ctx.pool());
    (repo, ctx)
}

fn km(value: f64) -> SearchRadius {
    SearchRadius::try_new(value, DistanceUnit::Kilometers).unwrap()
}

#[tokio::test]
async fn test_save_then_search_at_same_point_returns_distance_zero() {
    let (repo, _ctx) = setup_context().await;
    let location = DriverLocation::try_new("v1", 1.0, 1.0).unwrap();

    repo.save(&location).await.expect("Save failed");
    let hits = repo
        .search(GeoPoint::from_raw(1.0, 1.0), km(1.0), 0)
        .await
        .expect("Search failed");

    assert_eq!(hits.len(), 1);
    let (found, dist) = &hits[0];
    assert_eq!(found.vehicle_id().as_str(), "v1");
    // Redis stocke un geohash 52 bits : précision ~0.6 m
    assert!((found.lat() - 1.0).abs() < 1e-5);
    assert!((found.lng() - 1.0).abs() < 1e-5);
    assert!(*dist < 0.001);
}

#[tokio::test]
async fn test_save_overwrites_previous_position() {
    let (repo, _ctx) = setup_context().await;

    repo.save(&DriverLocation::try_new("v1", 48.8566, 2.3522).unwrap()).await.unwrap();
    repo.save(&DriverLocation::try_new("v1", 45.7640, 4.8357).unwrap()).await.unwrap();

    let near_paris = repo.search(GeoPoint::from_raw(48.8566, 2.3522), km(10.0), 0).await.unwrap();
    let near_lyon = repo.search(GeoPoint::from_raw(45.7640, 4.8357), km(10.0), 0).await.unwrap();

    assert!(near_paris.is_empty());
    assert_eq!(near_lyon.len(), 1);
}

#[tokio::test]
async fn test_results_are_sorted_by_ascending_distance_in_requested_unit() {
    let (repo, _ctx) = setup_context().await;
    let center = GeoPoint::from_raw(48.8566, 2.3522);

    // ~5.5 km, ~1.1 km, ~11 km au nord du centre
    repo.save(&DriverLocation::try_new("mid", 48.9066, 2.3522).unwrap()).await.unwrap();
    repo.save(&DriverLocation::try_new("near", 48.8666, 2.3522).unwrap()).await.unwrap();
    repo.save(&DriverLocation::try_new("far", 48.9566, 2.3522).unwrap()).await.unwrap();

    let hits = repo.search(center, km(50.0), 0).await.unwrap();
    let ids: Vec<&str> = hits.iter().map(|(l, _)| l.vehicle_id().as_str()).collect();
    assert_eq!(ids, vec!["near", "mid", "far"]);
    assert!((hits[0].1 - 1.11).abs() < 0.05, "distance in km, got {}", hits[0].1);

    let in_meters = repo
        .search(center, SearchRadius::try_new(2_000.0, DistanceUnit::Meters).unwrap(), 0)
        .await
        .unwrap();
    assert_eq!(in_meters.len(), 1);
    assert!(in_meters[0].1 > 1_000.0);
}

#[tokio::test]
async fn test_limit_is_clamped_and_keeps_the_nearest() {
    let (repo, _ctx) = setup_context().await;

    // Insertion du plus lointain au plus proche : l'ordre d'écriture ne doit pas compter
    for i in (0..30).rev() {
        let lat = 10.0 + (i as f64) * 0.001;
        repo.save(&DriverLocation::try_new(&format!("v{}", i), lat, 10.0).unwrap())
            .await
            .unwrap();
    }
    let center = GeoPoint::from_raw(10.0, 10.0);

    let default = repo.search(center, km(100.0), 0).await.unwrap();
    let too_many = repo.search(center, km(100.0), 500).await.unwrap();
    let five = repo.search(center, km(100.0), 5).await.unwrap();

    assert_eq!(default.len(), DEFAULT_SEARCH_LIMIT);
    assert_eq!(too_many.len(), DEFAULT_SEARCH_LIMIT);

    let nearest: Vec<String> = (0..5).map(|i| format!("v{}", i)).collect();
    let ids: Vec<&str> = five.iter().map(|(l, _)| l.vehicle_id().as_str()).collect();
    assert_eq!(ids, nearest);
    assert!(five.windows(2).all(|w| w[0].1 <= w[1].1));

    let default_ids: Vec<String> = default.iter().map(|(l, _)| l.vehicle_id().to_string()).collect();
    let expected: Vec<String> = (0..DEFAULT_SEARCH_LIMIT).map(|i| format!("v{}", i)).collect();
    assert_eq!(default_ids, expected);
}

#[tokio::test]
async fn test_nothing_in_range_is_an_empty_result() {
    let (repo, _ctx) = setup_context().await;

    let hits = repo.search(GeoPoint::from_raw(0.0, 0.0), km(1.0), 0).await.unwrap();

    assert!(hits.is_empty());
}

#[tokio::test]
async fn test_out_of_range_center_is_an_empty_result() {
    let (repo, _ctx) = setup_context().await;
    repo.save(&DriverLocation::try_new("v1", 1.0, 1.0).unwrap()).await.unwrap();

    let hits = repo.search(GeoPoint::from_raw(95.0, 200.0), km(200.0), 0).await.unwrap();

    assert!(hits.is_empty());
}

#[tokio::test]
async fn test_invalid_position_is_rejected_before_redis() {
    let (repo, _ctx) = setup_context().await;
    let location = DriverLocation::new(
        location::domain::value_objects::VehicleId::from_raw(""),
        GeoPoint::from_raw(1.0, 1.0),
    );

    let err = repo.save(&location).await.unwrap_err();

    assert!(matches!(err, DomainError::Validation { field: "vehicle_id", .. }));
}

#[tokio::test]
async fn test_latitude_outside_redis_geo_range_is_a_storage_error() {
    let (repo, _ctx) = setup_context().await;

    // Valide pour le domaine, mais GEOADD refuse au-delà de ±85.05112878
    let err = repo
        .save(&DriverLocation::try_new("v1", 89.0, 0.0).unwrap())
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Storage(_)));
}
