use crate::api::{ApiClient, ApiError, SignupRequest, UserProfile};
use std::rc::Rc;

#[derive(Clone)]
pub struct SignupRepository {
    client: Rc<ApiClient>,
}

impl SignupRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<UserProfile, ApiError> {
        self.client.signup(request).await
    }
}
