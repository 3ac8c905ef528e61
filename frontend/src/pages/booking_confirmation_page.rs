use dioxus::prelude::*;

use crate::routes::Route;

/// Entry point of the booking flow for a class picked from the search results.
#[component]
pub fn BookingConfirmationPage(class_id: String) -> Element {
    rsx! {
        Title { "Mentor Marketplace - Confirm booking" }
        div {
            id: "x-booking-confirmation-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 18px;
                padding: 36px 40px;
                max-width: 860px;
            ",
            h1 { style: "font-size: 40px; font-weight: 500; color: #0F172A; margin: 0;", "Confirm your booking" }
            div { style: "font-size: 18px; color: #4B5563;", "Class {class_id}" }
            Link {
                to: Route::HomePage {},
                span { style: "color: #4F46E5; font-size: 18px;", "Back to search" }
            }
        }
    }
}
