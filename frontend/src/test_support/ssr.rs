use crate::state::{query::provide_query_client, toast::ToastStore};
use leptos::*;

/// Owns a reactive runtime for one test and tears it down on drop.
struct TestRuntime {
    id: RuntimeId,
    suppress_resources: bool,
}

impl TestRuntime {
    fn start(suppress_resources: bool) -> Self {
        if suppress_resources {
            leptos_reactive::suppress_resource_load(true);
        }
        Self {
            id: create_runtime(),
            suppress_resources,
        }
    }
}

impl Drop for TestRuntime {
    fn drop(&mut self) {
        self.id.dispose();
        if self.suppress_resources {
            leptos_reactive::suppress_resource_load(false);
        }
    }
}

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let _runtime = TestRuntime::start(false);
    f()
}

/// Renders `view` to HTML inside the stores `AuthProvider` would provide.
/// Resources never load, so pages render their loading branch.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    render_with_stores(move |_| view())
}

/// Like `render_to_string`, but hands the toast store to `view` so tests
/// can seed it before rendering.
pub fn render_with_stores<F, N>(view: F) -> String
where
    F: FnOnce(ToastStore) -> N + 'static,
    N: IntoView + 'static,
{
    let _runtime = TestRuntime::start(true);
    provide_query_client();
    let toasts = ToastStore::new();
    provide_context(toasts);
    view(toasts).into_view().render_to_string().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::query::QueryClient;

    #[test]
    fn render_to_string_provides_page_stores() {
        let html = render_to_string(|| {
            let stores =
                use_context::<ToastStore>().is_some() && use_context::<QueryClient>().is_some();
            if stores {
                "stores"
            } else {
                "missing"
            }
        });
        assert!(html.contains("stores"), "{}", html);
    }
}
