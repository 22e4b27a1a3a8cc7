//! Sign-in, sign-up and password reset screen.

use tokio::sync::watch;

use super::mvi::{Intent, Reducer, UiState};
use crate::domain::UserAccount;
use crate::repository::{AuthRepository, Outcome, SignUpRequest};

/// Shown after sign-up when the account still needs email confirmation.
pub const CONFIRM_EMAIL_MESSAGE: &str = "Check your email to confirm your account";

pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthState {
    pub is_loading: bool,
    pub user: Option<UserAccount>,
    pub error: Option<String>,
    pub success_message: Option<String>,
}

impl UiState for AuthState {}

impl AuthState {
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthIntent {
    Started,
    SignedIn(UserAccount),
    SignedOut,
    Succeeded { message: String },
    Failed { error: String },
    ClearMessages,
}

impl Intent for AuthIntent {}

pub struct AuthReducer;

impl Reducer for AuthReducer {
    type State = AuthState;
    type Intent = AuthIntent;

    fn reduce(state: AuthState, intent: AuthIntent) -> AuthState {
        match intent {
            AuthIntent::Started => AuthState {
                is_loading: true,
                error: None,
                success_message: None,
                ..state
            },
            AuthIntent::SignedIn(user) => AuthState {
                is_loading: false,
                user: Some(user),
                error: None,
                ..state
            },
            AuthIntent::SignedOut => AuthState::default(),
            AuthIntent::Succeeded { message } => AuthState {
                is_loading: false,
                success_message: Some(message),
                ..state
            },
            AuthIntent::Failed { error } => AuthState {
                is_loading: false,
                error: Some(error),
                ..state
            },
            AuthIntent::ClearMessages => AuthState {
                error: None,
                success_message: None,
                ..state
            },
        }
    }
}

fn validate_email(email: &str) -> Result<(), String> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email is required".to_string());
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err("Enter a valid email address".to_string()),
    }
}

fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required".to_string());
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Sign-in only checks that both fields are present.
fn validate_credentials(email: &str, password: &str) -> Result<(), String> {
    validate_email(email)?;
    if password.is_empty() {
        return Err("Password is required".to_string());
    }
    Ok(())
}

fn validate_sign_up(request: &SignUpRequest) -> Result<(), String> {
    if request.display_name.trim().is_empty() {
        return Err("Name is required".to_string());
    }
    validate_email(&request.email)?;
    validate_password(&request.password)
}

pub struct AuthViewModel {
    repository: AuthRepository,
    state: watch::Sender<AuthState>,
}

impl AuthViewModel {
    pub fn new(repository: AuthRepository) -> Self {
        Self {
            repository,
            state: watch::Sender::new(AuthState::default()),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Load the profile for a session that is already established.
    pub async fn restore(&self) {
        self.dispatch(AuthIntent::Started);
        let intent = match self.repository.current_user().await {
            Ok(Some(user)) => AuthIntent::SignedIn(user),
            Ok(None) => AuthIntent::SignedOut,
            Err(err) => AuthIntent::Failed {
                error: err.into_message(),
            },
        };
        self.dispatch(intent);
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> bool {
        if let Err(error) = validate_credentials(email, password) {
            self.dispatch(AuthIntent::Failed { error });
            return false;
        }
        self.dispatch(AuthIntent::Started);
        self.finish_sign_in(self.repository.sign_in(email.trim(), password).await)
    }

    pub async fn sign_up(&self, request: SignUpRequest) -> bool {
        if let Err(error) = validate_sign_up(&request) {
            self.dispatch(AuthIntent::Failed { error });
            return false;
        }
        self.dispatch(AuthIntent::Started);
        let request = SignUpRequest {
            email: request.email.trim().to_string(),
            display_name: request.display_name.trim().to_string(),
            ..request
        };
        match self.repository.sign_up(request).await {
            // Email confirmation pending: the account exists but no session was issued.
            Ok(user) if !self.repository.session().is_signed_in() => {
                tracing::info!(user_id = %user.id, "signed up, awaiting email confirmation");
                self.dispatch(AuthIntent::Succeeded {
                    message: CONFIRM_EMAIL_MESSAGE.to_string(),
                });
                true
            }
            outcome => self.finish_sign_in(outcome),
        }
    }

    pub async fn sign_out(&self) {
        self.dispatch(AuthIntent::Started);
        match self.repository.sign_out().await {
            Ok(()) => self.dispatch(AuthIntent::SignedOut),
            Err(err) => self.dispatch(AuthIntent::Failed {
                error: err.into_message(),
            }),
        }
    }

    pub async fn send_password_reset(&self, email: &str) -> bool {
        if let Err(error) = validate_email(email) {
            self.dispatch(AuthIntent::Failed { error });
            return false;
        }
        self.dispatch(AuthIntent::Started);
        match self.repository.send_password_reset(email.trim()).await {
            Ok(()) => {
                self.dispatch(AuthIntent::Succeeded {
                    message: "Password reset email sent".to_string(),
                });
                true
            }
            Err(err) => {
                self.dispatch(AuthIntent::Failed {
                    error: err.into_message(),
                });
                false
            }
        }
    }

    pub fn clear_messages(&self) {
        self.dispatch(AuthIntent::ClearMessages);
    }

    fn finish_sign_in(&self, outcome: Outcome<UserAccount>) -> bool {
        match outcome {
            Ok(user) => {
                tracing::info!(user_id = %user.id, role = %user.role, "signed in");
                self.dispatch(AuthIntent::SignedIn(user));
                true
            }
            Err(err) => {
                self.dispatch(AuthIntent::Failed {
                    error: err.into_message(),
                });
                false
            }
        }
    }

    fn dispatch(&self, intent: AuthIntent) {
        self.state.send_modify(|state| {
            *state = AuthReducer::reduce(std::mem::take(state), intent);
        });
    }
}
