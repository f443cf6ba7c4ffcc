pub mod home;
pub mod signup;
