use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaStar, FaStarHalf};
use dioxus_free_icons::Icon;

use crate::directory::rating::{Reputation, StarRating};

#[component]
pub fn StarRatingDisplay(reputation: Reputation) -> Element {
    match reputation {
        Reputation::Rated { stars, score, .. } => {
            let StarRating { full, half, empty } = stars;

            rsx!(
                div { class: "flex items-center gap-1",
                    title: "{score:.1} out of 5",
                    for _ in 0..full {
                        span { class: "star-full", Icon { width: 16, height: 16, icon: FaStar } }
                    }
                    if half {
                        span { class: "star-half", Icon { width: 16, height: 16, icon: FaStarHalf } }
                    }
                    for _ in 0..empty {
                        span { class: "star-empty", Icon { width: 16, height: 16, icon: FaStar } }
                    }
                    span { class: "text-sm text-gray-500 ml-1",
                        "{reputation.review_label()}"
                    }
                }
            )
        }
        Reputation::Unrated { .. } => rsx!(
            span { class: "text-sm text-gray-500",
                "{reputation.review_label()}"
            }
        ),
    }
}
