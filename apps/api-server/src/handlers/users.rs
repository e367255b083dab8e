//! User sign-up and sign-in handlers.

use actix_web::{HttpResponse, web};
use std::sync::Arc;

use quill_core::domain::User;
use quill_core::ports::{BaseRepository, PasswordService, TokenService, UserRepository};
use quill_shared::dto::{AuthResponse, SignInRequest, SignUpRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/users/sign-up
pub async fn sign_up(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<SignUpRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    User::validate_sign_up(&req.email, &req.password, &req.name)?;

    // Check if the email is already taken
    if state.users.find_by_email(&req.email).await?.is_some() {
        return Err(AppError::BadRequest(
            "Email is already registered".to_string(),
        ));
    }

    // Hash the password; a value that is already a hash is left untouched.
    let password_hash = password_service
        .ensure_hashed(&req.password)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let user = User::new(req.email, req.name, password_hash);
    let saved = state.users.insert(user).await?;

    let token = token_service
        .issue_token(saved.id, &saved.name, &saved.email)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Created().json(AuthResponse {
        token,
        email: saved.email,
        name: saved.name,
        id: saved.id,
    }))
}

/// POST /api/v1/users/sign-in
pub async fn sign_in(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<SignInRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // An unknown email and a wrong password get the same answer.
    let user = state
        .users
        .find_by_email(&req.email)
        .await?
        .ok_or(AppError::Unauthorized)?;

    let valid = password_service
        .verify(&req.password, &user.password_hash)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    if !valid {
        return Err(AppError::Unauthorized);
    }

    let token = token_service
        .issue_token(user.id, &user.name, &user.email)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        token,
        email: user.email,
        name: user.name,
        id: user.id,
    }))
}
