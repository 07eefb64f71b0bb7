mod confirm;
mod destinations;

use pearl::{
    api::{ApiClient, HttpTransport},
    session::Identity,
    wizard::{form::FormField, step::WizardStep, TripWizard},
};
use pearl_test_utils::prelude::*;

/// The trip details used throughout the wizard tests
pub const DETAILS: [(FormField, &str); 10] = [
    (FormField::Email, "a@b.com"),
    (FormField::Contact, "0771234567"),
    (FormField::Country, "Germany"),
    (FormField::PassportNumber, "X123"),
    (FormField::Address, "Street 1"),
    (FormField::NumAdults, "2"),
    (FormField::NumChildren, "0"),
    (FormField::StartDate, "2025-06-01"),
    (FormField::NumDays, "5"),
    (FormField::TripPayment, "500"),
];

pub fn tourist_wizard() -> TripWizard {
    TripWizard::new(Identity::from_token(Some(&token::tourist())))
}

pub fn fill_details(wizard: &mut TripWizard) {
    for (field, value) in DETAILS {
        wizard.set_field(field, value);
    }
}

/// Endpoints read when the destination step loads with an empty selection
pub fn board_endpoints(builder: TestBuilder, wishlist: &[(i64, &str)], selection_reads: usize) -> TestBuilder {
    let ids: Vec<i64> = wishlist.iter().map(|(id, _)| *id).collect();
    let destinations = wishlist
        .iter()
        .map(|(id, name)| pearl_test_utils::fixtures::factory::destination(*id, name))
        .collect();

    builder
        .with_wishlist(TEST_TOURIST_ID, &ids, 1)
        .with_no_selection(TEST_TOURIST_ID, selection_reads)
        .with_active_trip(TEST_TOURIST_ID, false, 1)
        .with_accepted_trips(TEST_TOURIST_ID, vec![], 1)
        .with_destinations(destinations, 1)
}

/// Mock the selection set being created with destination 1
pub fn with_selection_created(builder: TestBuilder) -> TestBuilder {
    builder.with_mock_endpoint(|server| {
        server
            .mock("POST", "/selected-destinations/add")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                pearl_test_utils::fixtures::factory::selected_destinations(100, TEST_TOURIST_ID, &[1])
                    .to_string(),
            )
            .expect(1)
            .create()
    })
}

/// Load the destination step, select destination 1 and move on to the information step
pub async fn wizard_at_information<T: HttpTransport>(api: &ApiClient<T>) -> TripWizard {
    let mut wizard = tourist_wizard();
    wizard.load(api).await.unwrap();
    wizard.add_to_selection(api, 1).await.unwrap();

    assert_eq!(wizard.next(), Ok(WizardStep::FillInformation));

    wizard
}
