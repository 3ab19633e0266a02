//! Manager identity normalization.
//!
//! Sleeper users may be missing any of their display fields; every manager
//! coming out of here has non-empty names.

use serde::{Deserialize, Serialize};

use super::config::RecapConfig;
use crate::sleeper::types::SleeperUser;

pub const UNKNOWN_TEAM: &str = "Unknown Team";
pub const UNKNOWN_MANAGER: &str = "Unknown Manager";
const HANDLE_FALLBACK: &str = "manager";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Manager {
    pub user_id: String,
    pub display_name: String,
    pub handle: String,
    pub team_name: String,
    pub real_name: String,
}

/// First candidate that is present and non-blank, trimmed.
pub fn first_non_empty<'a, I>(candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
}

/// metadata.team_name -> display_name -> username -> "Unknown Team"
pub fn resolve_team_name(user: Option<&SleeperUser>) -> String {
    let Some(u) = user else {
        return UNKNOWN_TEAM.to_string();
    };
    first_non_empty([u.team_name(), u.display_name.as_deref(), u.username.as_deref()])
        .unwrap_or(UNKNOWN_TEAM)
        .to_string()
}

/// "@" + (display_name -> username -> "manager")
pub fn resolve_handle(user: Option<&SleeperUser>) -> String {
    let name = user
        .and_then(|u| first_non_empty([u.display_name.as_deref(), u.username.as_deref()]))
        .unwrap_or(HANDLE_FALLBACK);
    format!("@{}", name)
}

/// Build a manager for a roster owner. `user` is `None` when the owner id is
/// unknown to the league's user list (orphaned roster).
pub fn normalize_manager(
    user: Option<&SleeperUser>,
    owner_id: Option<&str>,
    config: &RecapConfig,
) -> Manager {
    let user_id = user
        .map(|u| u.user_id.as_str())
        .or(owner_id)
        .unwrap_or_default()
        .to_string();
    let team_name = resolve_team_name(user);
    let handle = resolve_handle(user);
    let display_name =
        user.and_then(|u| first_non_empty([u.display_name.as_deref(), u.username.as_deref()]));

    let real_name = first_non_empty([
        config.real_name_for(&handle, &user_id),
        display_name,
        Some(team_name.as_str()).filter(|t| *t != UNKNOWN_TEAM),
    ])
    .unwrap_or(UNKNOWN_MANAGER)
    .to_string();

    if user.is_none() {
        tracing::debug!(owner_id = %user_id, "no user for roster owner, using sentinel manager");
    }

    Manager {
        user_id,
        display_name: display_name.unwrap_or(UNKNOWN_MANAGER).to_string(),
        handle,
        team_name,
        real_name,
    }
}
