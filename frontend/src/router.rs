use leptos::*;
use leptos_router::*;

use crate::{
    components::toaster::Toaster,
    pages::{home::HomePage, signup::SignUpPage},
    state::auth::AuthProvider,
};

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    view! {
        <AuthProvider>
            <Router>
                <main>
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/signup" view=SignUpPage/>
                    </Routes>
                </main>
            </Router>
            <Toaster/>
        </AuthProvider>
    }
}

