use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::amenity::Amenity;
use crate::domain::entities::user::User;
use crate::errors::DomainError;
use crate::repositories::{
    AmenityRepository, MockAmenityRepository, MockPlaceAmenityRepository, MockPlaceRepository,
    MockUserRepository, PlaceAmenityRepository,
};
use crate::services::places::{NewPlace, PlaceService, UpdatePlace};

type TestPlaceService = PlaceService<
    MockPlaceRepository,
    MockUserRepository,
    MockAmenityRepository,
    MockPlaceAmenityRepository,
>;

struct Fixture {
    service: TestPlaceService,
    amenities: Arc<MockAmenityRepository>,
    links: Arc<MockPlaceAmenityRepository>,
    owner: User,
}

async fn fixture() -> Fixture {
    let owner = User::new("Owner", "One", "owner@x.com", "digest", false).unwrap();
    let users = Arc::new(MockUserRepository::with_user(owner.clone()).await);
    let amenities = Arc::new(MockAmenityRepository::new());
    let links = Arc::new(MockPlaceAmenityRepository::new());
    let service = PlaceService::new(
        Arc::new(MockPlaceRepository::new()),
        users,
        amenities.clone(),
        links.clone(),
    );
    Fixture {
        service,
        amenities,
        links,
        owner,
    }
}

fn new_place(owner_id: Uuid) -> NewPlace {
    NewPlace {
        title: "Cozy loft".to_string(),
        description: None,
        price: 100.0,
        latitude: 10.0,
        longitude: 10.0,
        owner_id,
    }
}

#[tokio::test]
async fn create_resolves_the_owner() {
    let f = fixture().await;

    let place = f.service.create(new_place(f.owner.id)).await.unwrap();
    assert_eq!(place.owner_id, f.owner.id);

    let err = f
        .service
        .create(new_place(Uuid::new_v4()))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Owner not found");
}

#[tokio::test]
async fn create_runs_the_field_validators() {
    let f = fixture().await;
    let mut input = new_place(f.owner.id);
    input.latitude = 91.0;
    assert!(matches!(
        f.service.create(input).await,
        Err(DomainError::Validation { .. })
    ));
}

#[tokio::test]
async fn update_is_a_partial_merge() {
    let f = fixture().await;
    let place = f.service.create(new_place(f.owner.id)).await.unwrap();

    let updated = f
        .service
        .update(
            place.id,
            UpdatePlace {
                price: Some(250.0),
                ..UpdatePlace::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.price(), 250.0);
    assert_eq!(updated.title, "Cozy loft");
    assert_eq!(updated.latitude(), 10.0);
}

#[tokio::test]
async fn update_rejects_out_of_range_values_without_a_write() {
    let f = fixture().await;
    let place = f.service.create(new_place(f.owner.id)).await.unwrap();

    let err = f
        .service
        .update(
            place.id,
            UpdatePlace {
                longitude: Some(181.0),
                ..UpdatePlace::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));

    assert_eq!(f.service.get(place.id).await.unwrap().longitude(), 10.0);
}

#[tokio::test]
async fn unknown_place_is_not_found() {
    let f = fixture().await;
    assert!(matches!(
        f.service.get(Uuid::new_v4()).await,
        Err(DomainError::NotFound { .. })
    ));
    assert!(matches!(
        f.service.update(Uuid::new_v4(), UpdatePlace::default()).await,
        Err(DomainError::NotFound { .. })
    ));
    assert!(matches!(
        f.service.delete(Uuid::new_v4()).await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn amenity_association_round_trip() {
    let f = fixture().await;
    let place = f.service.create(new_place(f.owner.id)).await.unwrap();
    let amenity = f
        .amenities
        .create(Amenity::new("Wi-Fi").unwrap())
        .await
        .unwrap();

    f.service.add_amenity(place.id, amenity.id).await.unwrap();

    // Linking twice is a validation failure
    assert!(f.service.add_amenity(place.id, amenity.id).await.is_err());

    let listed = f.service.list_amenities(place.id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Wi-Fi");

    f.service
        .remove_amenity(place.id, amenity.id)
        .await
        .unwrap();
    assert!(f.service.list_amenities(place.id).await.unwrap().is_empty());

    let err = f
        .service
        .remove_amenity(place.id, amenity.id)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn add_amenity_requires_both_sides_to_exist() {
    let f = fixture().await;
    let place = f.service.create(new_place(f.owner.id)).await.unwrap();

    let err = f
        .service
        .add_amenity(place.id, Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));

    let amenity = f
        .amenities
        .create(Amenity::new("Pool").unwrap())
        .await
        .unwrap();
    let err = f
        .service
        .add_amenity(Uuid::new_v4(), amenity.id)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn delete_clears_amenity_links() {
    let f = fixture().await;
    let place = f.service.create(new_place(f.owner.id)).await.unwrap();
    let amenity = f
        .amenities
        .create(Amenity::new("Wi-Fi").unwrap())
        .await
        .unwrap();
    f.service.add_amenity(place.id, amenity.id).await.unwrap();

    f.service.delete(place.id).await.unwrap();
    assert!(f
        .links
        .amenities_for_place(place.id)
        .await
        .unwrap()
        .is_empty());
}
