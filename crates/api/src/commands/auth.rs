use baitulmal_core::navigation::Route;
use baitulmal_core::AuthOutcome;
use baitulmal_domain::{AuthSession, BaitulMalError, Result};

use super::{authorize, render, OutputFormat};
use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

fn describe(session: &AuthSession) -> String {
    format!(
        "{} {} <{}>\nRole: {}",
        session.name, session.last_name, session.email, session.role
    )
}

/// The token never leaves the state file
fn redacted(session: &AuthSession) -> AuthSession {
    AuthSession { jwt: String::new(), ..session.clone() }
}

pub async fn login(
    ctx: &AppContext,
    email: &str,
    password: &str,
    format: OutputFormat,
) -> Result<String> {
    let session =
        execute_command("auth::login", || async { ctx.auth.login(email, password).await }).await?;
    render(format, &redacted(&session), |s| format!("Signed in as {}", describe(s)))
}

pub async fn logout(ctx: &AppContext) -> Result<String> {
    execute_command("auth::logout", || async { ctx.auth.logout() }).await?;
    Ok("Signed out".to_string())
}

pub async fn me(ctx: &AppContext, format: OutputFormat) -> Result<String> {
    authorize(ctx, Route::Dashboard)?;
    let outcome = execute_command("auth::me", || async { ctx.auth.refresh_me().await }).await?;
    match outcome {
        AuthOutcome::Authenticated(session) => render(format, &redacted(&session), describe),
        AuthOutcome::RedirectToLogin => {
            Err(BaitulMalError::Unauthorized("session expired; sign in again".into()))
        }
    }
}
