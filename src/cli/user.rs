use crate::{Res, management::CredentialStore, prompt::Prompt};

/// Settles which Spotify user the chain runs as.
///
/// `given` (the `--username` option, or `SPOTIFY_USER`) wins. Otherwise
/// each user with a stored token is offered in turn, and if none is picked
/// the username is asked for.
pub async fn username<C: CredentialStore, P: Prompt>(
    given: Option<String>,
    store: &C,
    prompt: &mut P,
) -> Res<String> {
    if let Some(username) = given.filter(|u| !u.trim().is_empty()) {
        return Ok(username);
    }

    for cached in store.usernames().await? {
        if prompt.confirm(&format!("Use cached username '{}'?", cached), true)? {
            return Ok(cached);
        }
    }

    loop {
        let username = prompt.input_text("Please enter your username")?;
        if !username.trim().is_empty() {
            return Ok(username.trim().to_string());
        }
    }
}
