pub mod form;
pub mod logo;
pub mod messages;
