pub mod allow_list;
pub mod form_body;
pub mod request_sequence;
