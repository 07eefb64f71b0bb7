pub mod dashboard;
pub mod destinations;
pub mod editor;
pub mod tour_guides;
pub mod trips;

pub use dashboard::AdminDashboard;
pub use destinations::AdminDestinations;
pub use tour_guides::AdminTourGuides;
pub use trips::AdminTrips;

use std::future::Future;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{components::EntityTable, store::notice::use_notices},
    error::api::ApiError,
    listing::{EntityListing, ListingSchema, ListingState},
    model::notice::IntoNotice,
};

/// Listing for `schema`, filled on mount by `fetch` and again whenever the returned
/// callback is called
fn use_listing<T, F, Fut>(
    schema: fn() -> ListingSchema<T>,
    fetch: F,
) -> (Signal<EntityListing<T>>, Callback<()>)
where
    T: Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    let mut listing = use_signal(|| EntityListing::new(schema()));
    let mut notices = use_notices();

    let reload = use_callback(move |_: ()| {
        let request = fetch();

        spawn(async move {
            let result = request.await;

            if let Err(e) = &result {
                tracing::error!(listing = listing.read().schema().title, "Failed to load listing: {}", e);
                notices.write().push(e.clone().into_notice());
            }
            listing.write().apply(result);
        });
    });

    use_hook(move || reload.call(()));

    (listing, reload)
}

fn listing_view<T: Clone + 'static>(
    mut listing: Signal<EntityListing<T>>,
    on_edit: Option<EventHandler<i64>>,
    on_delete: Option<EventHandler<i64>>,
) -> Element {
    let current = listing.read().clone();

    match current.state() {
        ListingState::Loading => rsx!(
            div { class: "flex justify-center p-8",
                span { class: "loading loading-spinner" }
            }
        ),
        ListingState::Failed(_) => rsx!(
            p { class: "text-red-700", "{current.schema().title} could not be loaded." }
        ),
        ListingState::Loaded(_) => rsx!(
            EntityTable {
                headers: current.headers(),
                rows: current.rows(),
                page: current.page(),
                page_count: current.page_count(),
                on_page: move |page| listing.write().set_page(page),
                on_edit,
                on_delete: on_delete.filter(|_| current.schema().deletable),
            }
        ),
    }
}
