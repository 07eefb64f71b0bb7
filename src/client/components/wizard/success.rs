use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaCircleCheck;
use dioxus_free_icons::Icon;

use crate::client::router::Route;

#[component]
pub fn SuccessStep() -> Element {
    rsx!(
        div { class: "flex flex-col items-center gap-4 p-8",
            span { class: "text-green-600",
                Icon { width: 64, height: 64, icon: FaCircleCheck }
            }
            h2 { class: "text-2xl font-semibold", "Trip Request Sent" }
            p { class: "text-gray-500 text-center max-w-md",
                "Your tour guide will review the request shortly. You can follow its status on your trips page."
            }
            Link { to: Route::TouristTrips {}, class: "btn btn-primary",
                "View My Trips"
            }
        }
    )
}
