use leptos::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <span class="loading loading-spinner loading-md"></span>
        </div>
    }
}
