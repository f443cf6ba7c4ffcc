use super::{repository::SignupRepository, utils};
use crate::api::{ApiClient, ApiError, SignupField, SignupRequest, UserProfile};
use crate::state::{
    query::{use_query_client, QueryInvalidator, AUTH_USER},
    toast::{use_toasts, Notifier},
};
use leptos::*;
use std::rc::Rc;

pub const SIGNUP_SUCCESS_MESSAGE: &str = "Account created successfully";

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Success(UserProfile),
    Error(ApiError),
}

impl SubmissionState {
    /// Moves to `Pending`. Refuses while an attempt is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        *self = SubmissionState::Pending;
        true
    }

    pub fn settle(result: &Result<UserProfile, ApiError>) -> Self {
        match result {
            Ok(user) => SubmissionState::Success(user.clone()),
            Err(err) => SubmissionState::Error(err.clone()),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionState::Pending)
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            SubmissionState::Error(err) => Some(err),
            _ => None,
        }
    }
}

/// Runs one signup attempt and fires its side effects: a toast either way,
/// and on success the "authUser" entry is invalidated.
pub async fn submit_signup<N, Q>(
    request: SignupRequest,
    repo: &SignupRepository,
    notifier: &N,
    cache: &Q,
) -> Result<UserProfile, ApiError>
where
    N: Notifier + ?Sized,
    Q: QueryInvalidator + ?Sized,
{
    let result = match utils::first_missing_field(&request) {
        Some(field) => Err(ApiError::MissingField(field)),
        None => {
            log::info!("submitting signup for {}", request.username);
            repo.signup(&request).await
        }
    };

    match &result {
        Ok(_) => {
            log::info!("signup succeeded for {}", request.username);
            notifier.success(SIGNUP_SUCCESS_MESSAGE);
            cache.invalidate(AUTH_USER);
        }
        Err(err) => {
            log::warn!("signup failed ({:?}): {}", err.kind(), err);
            notifier.error(&err.display_message());
        }
    }
    result
}

#[derive(Clone, Copy)]
pub struct SignupViewModel {
    pub form: RwSignal<SignupRequest>,
    pub state: RwSignal<SubmissionState>,
    pub signup_action: Action<SignupRequest, Result<UserProfile, ApiError>>,
}

impl SignupViewModel {
    pub fn set_field(&self, field: SignupField, value: String) {
        self.form
            .update(|form| utils::apply_field(form, field, value));
    }

    /// Dispatches the current form unless an attempt is pending.
    pub fn submit(&self) -> bool {
        let mut started = false;
        self.state.update(|state| started = state.begin());
        if !started {
            log::debug!("signup already pending, ignoring submit");
            return false;
        }
        self.signup_action.dispatch(self.form.get_untracked());
        true
    }

    pub fn pending(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(SubmissionState::is_pending))
    }

    pub fn error(&self) -> Signal<Option<ApiError>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.error().cloned()))
    }
}

pub fn use_signup_view_model() -> SignupViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let repository = SignupRepository::new_with_client(Rc::new(api));
    let toasts = use_toasts();
    let query = use_query_client();

    let form = create_rw_signal(SignupRequest::default());
    let state = create_rw_signal(SubmissionState::default());

    let signup_action = create_action(move |request: &SignupRequest| {
        let repo = repository.clone();
        let request = request.clone();
        async move {
            let result = submit_signup(request, &repo, &toasts, &query).await;
            state.set(SubmissionState::settle(&result));
            result
        }
    });

    SignupViewModel {
        form,
        state,
        signup_action,
    }
}
