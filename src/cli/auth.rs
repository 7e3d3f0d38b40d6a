//! Login, registration and logout commands

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};
use log::debug;

use crate::cli::{CommandContext, next_step};
use crate::client::{EventBookerApi, LoginRequest, RegisterRequest};
use crate::error::{Error, Result};
use crate::session::{Route, SessionManager};
use crate::storage::KeyValueStore;

/// Minimum accepted password length at registration
pub const MIN_PASSWORD_LEN: usize = 6;

/// Run the login command
pub async fn run_login(
    ctx: &mut CommandContext,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let request = LoginRequest {
        email: prompt_text(email, "Email")?,
        password: prompt_password(password, "Password")?,
    };

    let route = perform_login(&ctx.client, &mut ctx.session, &request).await?;
    debug!("Login succeeded, continuing at {}", route.path());

    let name = ctx
        .session
        .identity()
        .map(|identity| identity.name.as_str())
        .unwrap_or_default();
    println!("{} Welcome back, {}!", "✓".green(), name.bold());
    println!("  → Next: {}", next_step(route).cyan());
    Ok(())
}

/// Run the register command
pub async fn run_register(
    ctx: &CommandContext,
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let request = RegisterRequest {
        name: prompt_text(name, "Name")?,
        email: prompt_text(email, "Email")?,
        password: prompt_password(password, "Password")?,
    };

    let route = perform_register(&ctx.client, &request).await?;

    println!("{} Account created for {}", "✓".green(), request.email.bold());
    println!("  → Log in with: {}", next_step(route).cyan());
    Ok(())
}

/// Run the logout command
pub fn run_logout(ctx: &mut CommandContext) -> Result<()> {
    let was_authenticated = ctx.session.is_authenticated();
    let route = ctx.session.logout()?;
    debug!("Logged out, continuing at {}", route.path());

    if was_authenticated {
        println!("{} Logged out", "✓".green());
    } else {
        println!("Not logged in, nothing to do");
    }
    println!("  → Log in again with: {}", next_step(route).cyan());
    Ok(())
}

/// Exchange credentials for a token and adopt it.
///
/// API failures are reported as `Login failed: <server message>` and leave the
/// session untouched. A token that does not decode surfaces as a session error.
pub async fn perform_login<A, S>(
    api: &A,
    session: &mut SessionManager<S>,
    request: &LoginRequest,
) -> Result<Route>
where
    A: EventBookerApi + ?Sized,
    S: KeyValueStore,
{
    let response = match api.login(request).await {
        Ok(response) => response,
        Err(Error::Api(e)) => {
            debug!("Login request failed: {}", e);
            return Err(failure("Login failed", e.server_message()));
        }
        Err(e) => return Err(e),
    };

    session.login(&response.access_token)
}

/// Create an account. Input is validated before any request goes out.
pub async fn perform_register<A>(api: &A, request: &RegisterRequest) -> Result<Route>
where
    A: EventBookerApi + ?Sized,
{
    validate_registration(request)?;

    match api.register(request).await {
        Ok(()) => Ok(Route::Login),
        Err(Error::Api(e)) => {
            debug!("Register request failed: {}", e);
            Err(failure("Registration failed", e.server_message()))
        }
        Err(e) => Err(e),
    }
}

fn validate_registration(request: &RegisterRequest) -> Result<()> {
    if request.name.trim().is_empty() {
        return Err(Error::Validation("name is required".to_string()));
    }
    if !request.email.contains('@') {
        return Err(Error::Validation(format!(
            "'{}' is not a valid email address",
            request.email
        )));
    }
    if request.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(Error::Validation(format!(
            "password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

fn failure(prefix: &str, message: Option<&str>) -> Error {
    match message {
        Some(message) => Error::Other(format!("{}: {}", prefix, message)),
        None => Error::Other(prefix.to_string()),
    }
}

fn prompt_text(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Ok(Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .interact_text()?),
    }
}

fn prompt_password(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Ok(Password::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .interact()?),
    }
}
