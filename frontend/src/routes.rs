use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use common::search_query::MarketplaceQuery;

use crate::data_definitions::url_param::UrlParam;
use crate::pages::booking_confirmation_page::BookingConfirmationPage;
use crate::pages::home_page::HomePage;
use crate::pages::mentor_profile_page::MentorProfilePage;
use crate::pages::search_page::SearchPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/search/:query")]
    SearchPage { query: UrlParam<MarketplaceQuery> },


    #[route("/mentor/:mentor_id")]
    MentorProfilePage { mentor_id: String },


    #[route("/booking/confirm/:class_id")]
    BookingConfirmationPage { class_id: String },

}

impl Route {
    pub fn search_page_from_query(q: MarketplaceQuery) -> Self {
        Self::SearchPage { query: UrlParam::from(q) }
    }
}
