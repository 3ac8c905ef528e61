pub mod booking_confirmation_page;
pub mod home_page;
pub mod mentor_profile_page;
pub mod search_page;
