use crate::state::toast::{use_toasts, Toast};
use leptos::*;

/// Stack of transient notifications, newest at the bottom.
#[component]
pub fn Toaster() -> impl IntoView {
    let store = use_toasts();
    let toasts = store.toasts();

    view! {
        <div class="toast toast-top toast-center z-50" aria-live="polite">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=toast.kind.as_class()
                            role="status"
                            on:click=move |_| store.dismiss(id)
                        >
                            <span>{toast.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::toast::ToastKind;
    use crate::test_support::ssr::render_with_stores;

    #[test]
    fn toaster_renders_pending_toasts_by_kind() {
        let html = render_with_stores(|toasts| {
            toasts.push(ToastKind::Success, "Account created successfully");
            toasts.push(ToastKind::Error, "username taken");
            view! { <Toaster /> }
        });
        assert!(html.contains("Account created successfully"));
        assert!(html.contains("alert-success"));
        assert!(html.contains("username taken"));
        assert!(html.contains("alert-error"));
    }

    #[test]
    fn dismissed_toasts_are_not_rendered() {
        let html = render_with_stores(|toasts| {
            let id = toasts.push(ToastKind::Error, "gone");
            toasts.dismiss(id);
            view! { <Toaster /> }
        });
        assert!(!html.contains("gone"));
    }
}
