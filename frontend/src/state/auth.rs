use crate::{
    api::{ApiClient, UserProfile},
    state::{
        query::{provide_query_client, AUTH_USER},
        toast::provide_toasts,
    },
};
use leptos::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserProfile>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl AuthState {
    fn from_lookup(result: Option<Option<UserProfile>>) -> Self {
        match result {
            None => Self {
                loading: true,
                ..Self::default()
            },
            Some(user) => Self {
                is_authenticated: user.is_some(),
                user,
                loading: false,
            },
        }
    }
}

/// The "authUser" query. Re-fetches whenever the key is invalidated.
pub type AuthResource = Resource<u64, Option<UserProfile>>;

fn create_auth_resource() -> AuthResource {
    let query = provide_query_client();
    let api_client = use_context::<ApiClient>().unwrap_or_default();
    create_local_resource(
        move || query.generation(AUTH_USER),
        move |_| {
            let api_client = api_client.clone();
            async move { check_auth_status(&api_client).await }
        },
    )
}

async fn check_auth_status(api_client: &ApiClient) -> Option<UserProfile> {
    match api_client.get_me().await {
        Ok(user) if user.is_null() => None,
        Ok(user) => Some(user),
        Err(err) => {
            log::debug!("no authenticated user: {}", err);
            None
        }
    }
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    provide_toasts();
    let resource = create_auth_resource();
    provide_context(resource);
    view! { <>{children()}</> }
}

pub fn use_auth() -> Signal<AuthState> {
    match use_context::<AuthResource>() {
        Some(resource) => Signal::derive(move || AuthState::from_lookup(resource.get())),
        None => Signal::derive(AuthState::default),
    }
}
