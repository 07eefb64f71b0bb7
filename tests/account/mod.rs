use mockito::Matcher;
use pearl::{
    account::{
        profile::TouristAccount,
        signup::{Signup, SignupField},
    },
    model::notice::NoticeLevel,
};
use pearl_test_utils::{fixtures::factory, prelude::*};
use serde_json::json;

use crate::util::client;

fn filled_signup() -> Signup {
    let mut signup = Signup::default();
    let values = [
        (SignupField::Name, "Anna Schmidt"),
        (SignupField::Email, "anna@example.de"),
        (SignupField::Password, "hunter22"),
        (SignupField::ConfirmPassword, "hunter22"),
        (SignupField::PassportNumber, "C01X00T47"),
        (SignupField::Country, "Germany"),
        (SignupField::Address, "Berlin"),
        (SignupField::BirthDay, "1990-04-12"),
    ];
    for (field, value) in values {
        signup.form.set_field(field, value);
    }

    signup
}

fn profile() -> serde_json::Value {
    json!({
        "id": 1,
        "name": "Anna Schmidt",
        "email": "anna@example.de",
        "role": "tourist",
        "profilePicture": null,
        "tourist": {
            "id": 4,
            "userId": 1,
            "passportNumber": "C01X00T47",
            "country": "Germany",
            "address": "Berlin",
            "birthDay": "1990-04-12",
        },
    })
}

#[tokio::test]
/// Expect a sign up to register a tourist account and send the user on to sign in
async fn registers_tourist() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let register = test
        .server
        .mock("POST", "/auth/register/tourist")
        .match_body(Matcher::PartialJson(json!({
            "name": "Anna Schmidt",
            "email": "anna@example.de",
            "role": "tourist",
            "passportNumber": "C01X00T47",
            "birthDay": "1990-04-12",
        })))
        .with_status(201)
        .expect(1)
        .create();

    let api = client(&test, None);
    let mut signup = filled_signup();
    let registration = signup.begin_submit().unwrap();
    let result = api.register_tourist(&registration).await;
    let (registered, notice) = signup.finish_submit(result);

    assert!(registered);
    assert_eq!(notice.message, "Sign Up successful! Please log in.");
    assert_eq!(signup.form.field(SignupField::Name), "");

    register.assert();

    Ok(())
}

#[tokio::test]
/// Expect a refused sign up to show the API's reason and keep the form
async fn reports_refused_signup() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let register = test.with_json_endpoint(
        "POST",
        "/auth/register/tourist",
        400,
        &json!({ "error": "Email already registered" }),
        1,
    )?;

    let api = client(&test, None);
    let mut signup = filled_signup();
    let registration = signup.begin_submit().unwrap();
    let result = api.register_tourist(&registration).await;
    let (registered, notice) = signup.finish_submit(result);

    assert!(!registered);
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, "Email already registered");
    assert_eq!(signup.form.field(SignupField::Name), "Anna Schmidt");

    register.assert();

    Ok(())
}

#[tokio::test]
/// Expect the account page to load the profile and completed trips, then store an edit
async fn loads_and_updates_profile() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let load = test.with_json_endpoint("GET", "/tourists/1/profile", 200, &profile(), 1)?;
    let trips = test.with_json_endpoint(
        "GET",
        "/trips/trip-by-tourist/1/completed",
        200,
        &json!([factory::trip(5, TEST_TOURIST_ID, TEST_GUIDE_ID, "Completed")]),
        1,
    )?;
    let update = test
        .server
        .mock("PUT", "/tourists/1/profile")
        .match_body(Matcher::PartialJson(json!({
            "country": "Austria",
            "passportNumber": "C01X00T47",
        })))
        .with_status(200)
        .expect(1)
        .create();

    let api = client(&test, Some(&token::tourist()));
    let mut account = TouristAccount::default();
    let failed = account.apply(TouristAccount::fetch(&api, TEST_TOURIST_ID).await);

    assert!(failed.is_empty());
    assert_eq!(account.completed_trips.len(), 1);

    account.begin_edit();
    if let Some(form) = account.editing.as_mut() {
        form.country = "Austria".to_string();
    }
    let profile_update = account.begin_save().unwrap().unwrap();
    let result = api.update_tourist_profile(TEST_TOURIST_ID, &profile_update).await;
    let notice = account.finish_save(profile_update, result);

    assert_eq!(notice.message, "Profile updated successfully!");
    assert_eq!(
        account.profile.as_ref().map(|p| p.tourist.country.as_str()),
        Some("Austria")
    );
    assert!(account.editing.is_none());

    load.assert();
    trips.assert();
    update.assert();

    Ok(())
}

#[tokio::test]
/// Expect a tourist without completed trips to still see their profile
async fn missing_completed_trips_are_empty() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let load = test.with_json_endpoint("GET", "/tourists/1/profile", 200, &profile(), 1)?;
    let trips = test
        .server
        .mock("GET", "/trips/trip-by-tourist/1/completed")
        .with_status(404)
        .expect(1)
        .create();

    let api = client(&test, Some(&token::tourist()));
    let mut account = TouristAccount::default();
    let failed = account.apply(TouristAccount::fetch(&api, TEST_TOURIST_ID).await);

    assert!(failed.is_empty());
    assert!(account.profile.is_some());
    assert!(account.completed_trips.is_empty());

    load.assert();
    trips.assert();

    Ok(())
}
