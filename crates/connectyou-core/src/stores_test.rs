use super::*;

#[test]
fn category_round_trips_known_values() {
    for category in StoreCategory::KNOWN {
        let raw: String = category.clone().into();
        assert_eq!(StoreCategory::from(raw), category);
    }
}

#[test]
fn unknown_category_is_preserved_as_other() {
    let category = StoreCategory::from("restaurant");
    assert_eq!(category, StoreCategory::Other("restaurant".to_string()));
    assert_eq!(category.as_str(), "restaurant");
}

#[test]
fn category_label_capitalises_first_letter() {
    assert_eq!(StoreCategory::Grocery.label(), "Grocery");
    assert_eq!(StoreCategory::Other("retail".into()).label(), "Retail");
    assert_eq!(StoreCategory::Other(String::new()).label(), "");
}

#[test]
fn store_deserializes_api_shape() {
    let json = serde_json::json!({
        "id": 1,
        "name": "Central Grocery",
        "type": "grocery",
        "address": "123 Main St, New York, NY",
        "lat": 40.7128,
        "lon": -74.006,
        "rating": 4.5,
        "reviews": 120
    });

    let store: Store = serde_json::from_value(json).expect("store should parse");
    assert_eq!(store.id, 1);
    assert_eq!(store.category, StoreCategory::Grocery);
    assert!((store.location.latitude - 40.7128).abs() < f64::EPSILON);
    assert!((store.location.longitude + 74.006).abs() < f64::EPSILON);
    assert_eq!(store.reviews, 120);
    assert!(store.description.is_empty());
    assert!(store.hours.is_empty());
    assert!(store.distance.is_none());
}

#[test]
fn store_accepts_lng_alias() {
    let json = serde_json::json!({
        "id": 7,
        "name": "Fashion Store",
        "type": "clothing",
        "address": "321 Fashion Blvd",
        "lat": 40.7158,
        "lng": -74.009,
        "rating": 4.1
    });

    let store: Store = serde_json::from_value(json).expect("lng alias should parse");
    assert!((store.location.longitude + 74.009).abs() < f64::EPSILON);
    assert_eq!(store.reviews, 0);
}

#[test]
fn store_with_unknown_type_still_parses() {
    let json = serde_json::json!({
        "id": 9,
        "name": "Corner Diner",
        "type": "restaurant",
        "address": "1 Food Sq",
        "lat": 0.0,
        "lon": 0.0,
        "rating": 3.0
    });

    let store: Store = serde_json::from_value(json).expect("unknown type should not fail");
    assert_eq!(store.category, StoreCategory::Other("restaurant".into()));
}

#[test]
fn store_serializes_type_and_coordinates_flat() {
    let store = Store {
        id: 2,
        name: "City Books".into(),
        category: StoreCategory::Books,
        address: "456 Book Lane".into(),
        location: Coordinate::new(40.7138, -74.009),
        rating: 4.8,
        reviews: 85,
        description: String::new(),
        hours: String::new(),
        distance: Some("1.2 km".into()),
    };

    let value = serde_json::to_value(&store).unwrap();
    assert_eq!(value["type"], "books");
    assert_eq!(value["lat"], 40.7138);
    assert_eq!(value["lon"], -74.009);
    assert_eq!(value["distance"], "1.2 km");
}

#[test]
fn star_string_floors_rating() {
    let mut store = crate::sample_stores().remove(0);
    store.rating = 4.9;
    assert_eq!(store.star_string().chars().count(), 4);
    store.rating = 7.0;
    assert_eq!(store.star_string().chars().count(), 5);
}
