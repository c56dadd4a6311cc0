//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    LoginInput, LoginUseCase, RegisterInput, RegisterUseCase, SendVerificationInput,
    SendVerificationUseCase,
};
use crate::domain::repository::{MailTransport, UserRepository};
use crate::error::AuthResult;
use crate::presentation::dto::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, SendVerificationRequest,
    SendVerificationResponse,
};

/// Shared state for auth handlers
pub struct AuthAppState<R, M>
where
    R: UserRepository + Send + Sync + 'static,
    M: MailTransport + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub mailer: Arc<M>,
    pub config: Arc<AuthConfig>,
}

// Manual impl: a derived Clone would require R: Clone and M: Clone
impl<R, M> Clone for AuthAppState<R, M>
where
    R: UserRepository + Send + Sync + 'static,
    M: MailTransport + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            mailer: self.mailer.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/auth/register
pub async fn register<R, M>(
    State(state): State<AuthAppState<R, M>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<(StatusCode, Json<RegisterResponse>)>
where
    R: UserRepository + Send + Sync + 'static,
    M: MailTransport + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let input = RegisterInput {
        username: req.username,
        email: req.email,
        password: req.password,
        confirm_password: req.confirm_password,
    };

    let output = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            user_id: output.user_id,
            username: output.username,
            email: output.email,
        }),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<R, M>(
    State(state): State<AuthAppState<R, M>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Json<LoginResponse>>
where
    R: UserRepository + Send + Sync + 'static,
    M: MailTransport + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());

    let input = LoginInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(LoginResponse {
        user_id: output.user_id,
        username: output.username,
        email: output.email,
    }))
}

// ============================================================================
// Verification
// ============================================================================

/// POST /api/auth/verification
pub async fn send_verification<R, M>(
    State(state): State<AuthAppState<R, M>>,
    Json(req): Json<SendVerificationRequest>,
) -> AuthResult<Json<SendVerificationResponse>>
where
    R: UserRepository + Send + Sync + 'static,
    M: MailTransport + Send + Sync + 'static,
{
    let use_case = SendVerificationUseCase::new(state.mailer.clone(), state.config.clone());

    let input = SendVerificationInput {
        email: req.email,
        code: req.code,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(SendVerificationResponse {
        message_id: output.message_id,
    }))
}
