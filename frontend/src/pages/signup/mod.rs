use crate::components::guard::RedirectIfAuthenticated;
use leptos::*;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::SignupPanel;

#[component]
pub fn SignUpPage() -> impl IntoView {
    view! {
        <RedirectIfAuthenticated>
            <SignupPanel />
        </RedirectIfAuthenticated>
    }
}
