use crate::{components::layout::LoadingSpinner, state::auth::use_auth};
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <div class="min-h-screen">
            <div class="max-w-7xl mx-auto py-12 px-4 sm:px-6 lg:px-8">
                <div class="text-center">
                    {move || {
                        let state = auth.get();
                        if state.loading {
                            view! { <LoadingSpinner /> }.into_view()
                        } else if let Some(user) = state.user {
                            view! {
                                <h1 class="text-4xl font-extrabold text-white">
                                    {format!("Welcome, {}", user.display_name())}
                                </h1>
                            }
                                .into_view()
                        } else {
                            view! {
                                <h1 class="text-4xl font-extrabold text-white">"Happening now"</h1>
                                <div class="mt-5 flex gap-4 justify-center">
                                    <a href="/signup" class="btn rounded-full btn-primary text-white">
                                        "Create account"
                                    </a>
                                    <a href="/login" class="btn rounded-full btn-primary btn-outline text-white">
                                        "Sign in"
                                    </a>
                                </div>
                            }
                                .into_view()
                        }
                    }}
                </div>
            </div>
        </div>
    }
}
