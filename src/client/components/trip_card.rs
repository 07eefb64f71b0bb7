use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCalendarDays, FaLocationDot, FaUsers};
use dioxus_free_icons::Icon;

use crate::model::trip::{TripDto, TripStatus};

/// Card summarising a trip, `children` are rendered as the card's actions
#[component]
pub fn TripCard(
    trip: TripDto,
    show_status_message: Option<bool>,
    #[props(default = VNode::empty())] children: Element,
) -> Element {
    let start = trip
        .start_date
        .map_or_else(|| "N/A".to_string(), |d| d.format("%b %d, %Y").to_string());
    let end = trip
        .end_date()
        .map_or_else(|| "N/A".to_string(), |d| d.format("%b %d, %Y").to_string());
    let destinations = trip.destinations.join(", ");
    let badge = match trip.trip_status {
        TripStatus::Pending => "badge badge-warning",
        TripStatus::Rejected => "badge badge-error",
        _ => "badge badge-success",
    };

    rsx!(
        div { class: "card shadow-sm w-full max-w-96",
            div { class: "card-body",
                div { class: "flex justify-between items-center",
                    h2 { class: "card-title", "{trip.headline()}" }
                    span { class: "{badge}", "{trip.trip_status}" }
                }
                if let Some(tourist) = &trip.tourist_name {
                    p { class: "text-sm text-gray-500", "Requested by {tourist} from {trip.tourist_country}" }
                }
                div { class: "flex items-center gap-2",
                    Icon { width: 14, height: 14, icon: FaLocationDot }
                    p { "{destinations}" }
                }
                div { class: "flex items-center gap-2",
                    Icon { width: 14, height: 14, icon: FaCalendarDays }
                    p { "{start} to {end} ({trip.number_of_days} days)" }
                }
                div { class: "flex items-center gap-2",
                    Icon { width: 14, height: 14, icon: FaUsers }
                    p { "{trip.number_of_adults} adults, {trip.number_of_children} children" }
                }
                p { class: "font-medium", "Budget: {trip.trip_payment:.2}" }
                if show_status_message.unwrap_or(false) {
                    p { class: "text-sm text-violet-700", "{trip.status_message()}" }
                }
                div { class: "card-actions justify-end",
                    {children}
                }
            }
        }
    )
}
