//! HTML page and form handlers.

mod clubs;
mod events;
mod home;
mod registration;

pub use clubs::{
    club_create_form_handler, club_create_handler, club_delete_handler, club_detail_handler,
    club_edit_form_handler, club_search_handler, club_update_handler, clubs_list_handler,
};
pub use events::{event_create_form_handler, event_create_handler, events_list_handler};
pub use home::home_handler;
pub use registration::{register_form_handler, register_handler};
