use dioxus::prelude::*;

use crate::client::{
    components::{Navbar, RouteGuard},
    routes::{
        admin::{AdminDashboard, AdminDestinations, AdminTourGuides, AdminTrips},
        guide::{ActiveTours, CompletedTours, GuideAccount, GuideChat, TourRequests},
        tourist::{
            DestinationDetail, PlanTrip, TouristAccount, TouristChat, TouristDestinations,
            TouristHome, TouristTrips,
        },
        Home, Login, NotFound, Signup,
    },
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]
    #[layout(RouteGuard)]

    #[route("/")]
    Home {},

    #[route("/auth/login")]
    Login {},

    #[route("/auth/signup")]
    Signup {},

    #[nest("/tourist")]

        #[route("/home")]
        TouristHome {},

        #[route("/destinations")]
        TouristDestinations {},

        #[route("/destinations/:id")]
        DestinationDetail { id: i64 },

        #[route("/plan-trip")]
        PlanTrip {},

        #[route("/trips")]
        TouristTrips {},

        #[route("/chat")]
        TouristChat {},

        #[route("/account")]
        TouristAccount {},

    #[end_nest]

    #[nest("/tour-guide")]

        #[route("/account")]
        GuideAccount {},

        #[route("/tour-requests")]
        TourRequests {},

        #[route("/active-tours")]
        ActiveTours {},

        #[route("/completed-tours")]
        CompletedTours {},

        #[route("/chat")]
        GuideChat {},

    #[end_nest]

    #[nest("/admin")]

        #[route("/dashboard")]
        AdminDashboard {},

        #[route("/destinations")]
        AdminDestinations {},

        #[route("/trips")]
        AdminTrips {},

        #[route("/tour-guides")]
        AdminTourGuides {},

    #[end_nest]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
