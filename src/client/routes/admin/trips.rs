use dioxus::document::Title;
use dioxus::prelude::*;

use super::{listing_view, use_listing};
use crate::{
    client::{components::Page, store::session::use_api},
    listing::schema,
};

#[component]
pub fn AdminTrips() -> Element {
    let api = use_api();
    let (listing, _) = use_listing(schema::trips, move || {
        let api = api.clone();

        async move { api.list_trips().await }
    });

    rsx!(
        Title { "Trips | The Pearl" }
        Page { title: "Trips",
            {listing_view(listing, None, None)}
        }
    )
}
