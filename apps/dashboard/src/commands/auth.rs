use crate::commands::Context;
use crate::error::DashboardError;
use crate::state::StateCommand;

use client_core::session::Session;

use std::io::{BufRead, Write};

use log::info;

/// Complete Google sign-in.
///
/// # Arguments
///
/// * `callback` - Redirect URL or bare token; prompted for on stdin when `None`
///
/// # Errors
///
/// * `NotLoggedIn` - no token in the input, or the backend rejected it
/// * `Core` - the token could not be stored
pub async fn login(ctx: &Context, callback: Option<String>) -> Result<Session, DashboardError> {
    let input = match callback {
        Some(callback) => callback,
        None => prompt_for_callback(ctx)?,
    };

    let session = ctx
        .sessions
        .login_with_callback(&input)
        .await?
        .ok_or_else(|| {
            DashboardError::not_logged_in("Login failed: no valid token found")
        })?;

    ctx.state
        .update(StateCommand::SetSession(session.clone()))
        .await?;

    Ok(session)
}

pub async fn logout(ctx: &Context) -> Result<(), DashboardError> {
    ctx.sessions.logout()?;
    ctx.state.update(StateCommand::ClearSession).await
}

/// Fetch the profile of the stored token.
///
/// Unlike session restore this reports why it failed; a rejected token is
/// cleared by the client before the error comes back.
pub async fn whoami(ctx: &Context) -> Result<Session, DashboardError> {
    let user = ctx.client().get_user().await?;
    let session = Session { user };

    ctx.state
        .update(StateCommand::SetSession(session.clone()))
        .await?;

    Ok(session)
}

fn prompt_for_callback(ctx: &Context) -> Result<String, DashboardError> {
    let login_url = ctx.client().login_url()?;
    info!("Prompting for login callback");

    let mut stderr = std::io::stderr();
    writeln!(stderr, "Open this URL in your browser and sign in with Google:")?;
    writeln!(stderr, "\n  {login_url}\n")?;
    write!(stderr, "Paste the URL you were redirected to (or the token): ")?;
    stderr.flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;

    Ok(line.trim().to_string())
}
