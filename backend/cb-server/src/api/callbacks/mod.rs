pub mod append_response;
pub mod callback_list_response;
pub mod callbacks;
pub mod clear_response;
