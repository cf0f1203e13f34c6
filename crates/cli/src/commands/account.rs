//! The account subcommands: login, logout, whoami.

use fresh_bowl_storefront::{AppState, Result};

/// Authenticate against the backend and persist the session record.
pub async fn login(state: &AppState, email: &str, password: &str) -> Result<()> {
    let session = state.api().login(email, password).await?;
    println!("Logged in as {} <{}>", session.name, session.email);
    Ok(())
}

/// Drop the persisted session. Logging out while logged out is a no-op.
pub fn logout(state: &AppState) -> Result<()> {
    state.api().logout()?;
    println!("Logged out");
    Ok(())
}

/// Print the persisted session, if any.
pub fn whoami(state: &AppState) {
    match state.api().current_user() {
        Some(session) => println!("{} <{}> (user {})", session.name, session.email, session.user_id),
        None => println!("Not logged in"),
    }
}
