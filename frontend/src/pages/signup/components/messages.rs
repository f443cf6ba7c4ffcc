use crate::api::ApiError;
use leptos::*;

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <p class="text-red-500" role="alert">
                {move || error.get().map(|e| e.display_message()).unwrap_or_default()}
            </p>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[test]
    fn inline_error_renders_server_message() {
        let html = render_to_string(move || {
            let err = ApiError::rejected(400, &json!({"error": "username taken"}), "unused");
            let signal = create_rw_signal(Some(err));
            view! { <InlineErrorMessage error=signal.into() /> }
        });
        assert!(html.contains("username taken"));
        assert!(html.contains("text-red-500"));
    }

    #[test]
    fn inline_error_renders_nothing_without_error() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(None::<ApiError>);
            view! { <InlineErrorMessage error=signal.into() /> }
        });
        assert!(!html.contains("role=\"alert\""));
    }
}
