//! Auth API

use crate::{ClientError, ClientResult, HttpClient};
use shared::client::{LoginRequest, LoginResponse, RegisterRequest};
use shared::response::MutationResponse;

/// Log in and keep the returned token on `client`.
pub async fn login<C: HttpClient>(client: &mut C, request: &LoginRequest) -> ClientResult<LoginResponse> {
    request.validate()?;

    let response: LoginResponse = client.post("auth/login", request).await?;
    match response.token.as_deref().filter(|t| !t.is_empty()) {
        Some(token) => {
            client.set_token(Some(token.to_string()));
            tracing::info!(user = response.user_name(), "Logged in");
            Ok(response)
        }
        None => Err(ClientError::Api {
            status: 401,
            message: response.msg.unwrap_or_else(|| "Login failed".to_string()),
        }),
    }
}

/// Create an account. The caller logs in afterwards.
pub async fn register<C: HttpClient>(
    client: &C,
    request: &RegisterRequest,
) -> ClientResult<MutationResponse> {
    request.validate()?;
    let response: MutationResponse = client.post("auth/register", request).await?;
    tracing::info!(email = %request.email, "Registered");
    Ok(response)
}

/// Drop the token held by `client`.
pub fn logout<C: HttpClient>(client: &mut C) {
    client.set_token(None);
}
