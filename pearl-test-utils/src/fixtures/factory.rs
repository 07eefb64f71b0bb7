//! JSON bodies in the shape the REST API answers with.

use serde_json::{json, Value};

pub fn destination(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "image": format!("/images/destinations/{}.jpg", id),
        "type": "Nature",
        "province": "Uva",
        "district": "Badulla",
        "climate": "Cool",
        "activities": ["Hiking"],
        "details": [],
    })
}

pub fn wishlist(id: i64, tourist_id: i64, destinations: &[i64]) -> Value {
    json!({
        "id": id,
        "touristId": tourist_id,
        "destinations": destinations,
    })
}

pub fn selected_destinations(id: i64, tourist_id: i64, destinations: &[i64]) -> Value {
    json!({
        "id": id,
        "touristId": tourist_id,
        "selectedDestinations": destinations,
    })
}

pub fn tour_guide(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "userId": id,
        "name": name,
        "address": "12 Temple Road, Kandy",
        "telephone": "0712345678",
        "email": "guide@pearl.lk",
        "nic": "901234567V",
        "licenseNumber": format!("TG-{}", id),
        "reviewCount": 3,
    })
}

/// A trip with the provided status, starting on 2025-06-01 for five days
pub fn trip(id: i64, tourist_id: i64, tour_guide_id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "touristId": tourist_id,
        "touristName": "Peter Maxwell",
        "touristPassportNumber": "X123",
        "touristCountry": "Germany",
        "tourGuideId": tour_guide_id,
        "destinations": ["Ella Rock", "Galle Fort"],
        "numberOfAdults": 2,
        "numberOfChildren": 0,
        "startDate": "2025-06-01",
        "numberOfDays": 5,
        "tripStatus": status,
        "tripPayment": 500.0,
        "paymentStatus": "Pending",
    })
}
