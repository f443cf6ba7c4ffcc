use super::{
    client::{map_json_response, ApiClient},
    types::{ApiError, SignupRequest, UserProfile, DEFAULT_ERROR_MESSAGE, SIGNUP_FAILED_MESSAGE},
};

impl ApiClient {
    pub async fn signup(&self, request: &SignupRequest) -> Result<UserProfile, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/auth/signup", base_url))
            .json(request)
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        map_json_response(response, SIGNUP_FAILED_MESSAGE).await
    }

    pub async fn get_me(&self) -> Result<UserProfile, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/auth/me", base_url))
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        map_json_response(response, DEFAULT_ERROR_MESSAGE).await
    }
}
