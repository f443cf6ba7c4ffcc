use super::{components::form::SignupForm, components::logo::XLogo, view_model::use_signup_view_model};
use crate::api::SignupField;
use leptos::{ev::SubmitEvent, Callback, *};

#[component]
pub fn SignupPanel() -> impl IntoView {
    let vm = use_signup_view_model();

    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });
    let handle_input =
        Callback::new(move |(field, value): (SignupField, String)| vm.set_field(field, value));

    view! {
        <div class="max-w-screen-xl mx-auto flex h-screen px-10">
            <div class="flex-1 hidden lg:flex items-center justify-center">
                <XLogo class="lg:w-2/3 fill-white" />
            </div>

            <div class="flex-1 flex flex-col justify-center items-center">
                <SignupForm
                    form=vm.form.into()
                    error=vm.error()
                    pending=vm.pending()
                    on_input=handle_input
                    on_submit=handle_submit
                />

                <div class="flex flex-col lg:w-2/3 gap-2 mt-4">
                    <p class="text-white text-lg">"Already have an account?"</p>
                    <a href="/login">
                        <button class="btn rounded-full btn-primary text-white btn-outline w-full">
                            "Sign in"
                        </button>
                    </a>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_with_stores;

    #[test]
    fn panel_renders_form_and_sign_in_link() {
        let html = render_with_stores(|_| view! { <SignupPanel /> });
        assert!(html.contains("Join today."));
        assert!(html.contains("Already have an account?"));
        assert!(html.contains("href=\"/login\""));
        assert!(html.contains("Sign in"));
    }
}
