pub mod create;
pub mod remove;

use crate::errors::AppResult;
use crate::jira::WorklogApi;
use crate::models::RemoteUser;
use crate::ui::messages::info;
use log::debug;

/// Check the token by asking Jira who we are.
pub(crate) fn authenticate(api: &mut dyn WorklogApi) -> AppResult<RemoteUser> {
    let user = api.current_user()?;
    debug!("Authenticated as: {:?}", user);
    match &user.display_name {
        Some(name) => info(format!("Authenticated as {} ({})", name, user.key)),
        None => info(format!("Authenticated as {}", user.key)),
    }
    Ok(user)
}
