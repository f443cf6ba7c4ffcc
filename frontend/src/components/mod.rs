pub mod guard;
pub mod layout;
pub mod toaster;
