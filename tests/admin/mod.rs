use mockito::Matcher;
use pearl::{
    listing::editor::{DestinationForm, Editor, TourGuideForm, TourGuidePayload},
    model::{destination::DestinationDto, guide::TourGuideDto, notice::NoticeLevel},
};
use pearl_test_utils::{fixtures::factory, prelude::*};
use serde_json::json;

use crate::util::client;

#[tokio::test]
/// Expect a new destination to be posted with its details split into paragraphs
async fn adds_destination() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let create = test
        .server
        .mock("POST", "/destinations/add")
        .match_body(Matcher::Json(json!({
            "name": "Sigiriya",
            "type": "Historical",
            "details": ["Rock fortress.", "Climb at dawn."],
            "activities": ["Hiking"],
            "province": "Central",
            "district": "Matale",
            "climate": "Dry",
            "image": "https://img.pearl.lk/sigiriya.jpg",
        })))
        .with_status(201)
        .expect(1)
        .create();

    let mut editor = Editor::<DestinationForm>::default();
    editor.open_new();
    let form = editor.form_mut();
    form.name = "Sigiriya".to_string();
    form.kind = "Historical".to_string();
    form.province = "Central".to_string();
    form.district = "Matale".to_string();
    form.climate = "Dry".to_string();
    form.image = "https://img.pearl.lk/sigiriya.jpg".to_string();
    form.details = "Rock fortress.\n\nClimb at dawn.".to_string();
    form.toggle_activity("Hiking");

    let api = client(&test, Some(&token::admin()));
    let (target, payload) = editor.begin_save().unwrap().unwrap();
    let result = api.create_destination(&payload).await;
    let notice = editor.finish_save(target, result);

    assert_eq!(notice.message, "Destination added successfully!");
    assert!(!editor.is_open());

    create.assert();

    Ok(())
}

#[tokio::test]
/// Expect an edited destination to be patched by id and a refusal to keep the form open
async fn updates_destination() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let update = test
        .server
        .mock("PATCH", "/destinations/update_destination/3")
        .match_body(Matcher::PartialJson(json!({ "name": "Ella Rock Trail" })))
        .with_status(500)
        .expect(1)
        .create();

    let destination: DestinationDto = serde_json::from_value(factory::destination(3, "Ella Rock"))?;
    let mut editor = Editor::<DestinationForm>::default();
    editor.open_edit(&destination);
    editor.form_mut().name = "Ella Rock Trail".to_string();

    let api = client(&test, Some(&token::admin()));
    let (target, payload) = editor.begin_save().unwrap().unwrap();
    let result = api.update_destination(3, &payload).await;
    let notice = editor.finish_save(target, result);

    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, "Failed to update destination.");
    assert!(editor.is_open());

    update.assert();

    Ok(())
}

#[tokio::test]
/// Expect a new tour guide to be registered with a password and review count
async fn registers_tour_guide() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let register = test
        .server
        .mock("POST", "/auth/register/guide")
        .match_body(Matcher::PartialJson(json!({
            "name": "Nimal Perera",
            "password": "secret",
            "licenseNumber": "TG-77",
            "reviewCount": 0,
        })))
        .with_status(201)
        .expect(1)
        .create();

    let mut editor = Editor::<TourGuideForm>::default();
    editor.open_new();
    let form = editor.form_mut();
    form.name = "Nimal Perera".to_string();
    form.email = "nimal@pearl.lk".to_string();
    form.password = "secret".to_string();
    form.nic = "901234567V".to_string();
    form.telephone = "0712345678".to_string();
    form.address = "Kandy".to_string();
    form.license_number = "TG-77".to_string();

    let api = client(&test, Some(&token::admin()));
    let (target, payload) = editor.begin_save().unwrap().unwrap();
    let TourGuidePayload::Register(registration) = payload else {
        panic!("expected a registration for a new guide");
    };
    let result = api.register_tour_guide(&registration).await;
    let notice = editor.finish_save(target, result);

    assert_eq!(notice.message, "Tour guide added successfully!");

    register.assert();

    Ok(())
}

#[tokio::test]
/// Expect a guide's profile to be patched through their user account
async fn updates_tour_guide_profile() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let update = test
        .server
        .mock("PATCH", "/tour-guide/7/profile")
        .match_body(Matcher::PartialJson(json!({
            "telephone": "0770000000",
            "licenseNumber": "TG-7",
        })))
        .with_status(200)
        .expect(1)
        .create();

    let guide: TourGuideDto = serde_json::from_value(factory::tour_guide(TEST_GUIDE_ID, "Nimal"))?;
    let mut editor = Editor::<TourGuideForm>::default();
    editor.open_edit(&guide);
    editor.form_mut().telephone = "0770000000".to_string();

    let api = client(&test, Some(&token::admin()));
    let (target, payload) = editor.begin_save().unwrap().unwrap();
    let TourGuidePayload::Update { user_id, profile } = payload else {
        panic!("expected a profile update for an existing guide");
    };
    let result = api.update_tour_guide_profile(user_id, &profile).await;
    let notice = editor.finish_save(target, result);

    assert_eq!(notice.message, "Tour guide updated successfully!");

    update.assert();

    Ok(())
}

#[tokio::test]
/// Expect deleting a tour guide to address the guide record
async fn deletes_tour_guide() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let delete = test
        .server
        .mock("DELETE", "/tour-guide/delete-tour-guide/7")
        .with_status(204)
        .expect(1)
        .create();

    let api = client(&test, Some(&token::admin()));
    assert_eq!(api.delete_tour_guide(TEST_GUIDE_ID).await, Ok(()));

    delete.assert();

    Ok(())
}
