// In: src/identity.rs

//! The authenticated identity and organization scope supplied by the
//! identity provider, and the per-user profile kept by the tags API.
//! The core never authenticates anyone; it only checks that the context an
//! operation needs is present.

use serde::{Deserialize, Serialize};

use crate::error::LeaderboardError;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthContext {
    pub user_id: String,
    /// The organization (course) the user is acting for, if any.
    #[serde(default)]
    pub org_code: Option<String>,
}

impl AuthContext {
    pub fn new(user_id: impl Into<String>, org_code: Option<String>) -> Self {
        Self {
            user_id: user_id.into(),
            org_code,
        }
    }

    /// Resolves the organization code from an optional context.
    pub fn require_org(auth: Option<&AuthContext>) -> Result<&str, LeaderboardError> {
        let auth = auth.ok_or_else(|| {
            LeaderboardError::Unauthorized("You must be logged in to save settings.".to_string())
        })?;
        auth.org_code.as_deref().ok_or_else(|| {
            LeaderboardError::Unauthorized(
                "You must be logged in to an organization to perform this action.".to_string(),
            )
        })
    }
}

/// A player's profile as returned by the user-details endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    #[serde(default)]
    pub kinde_id: String,
    /// The name the player uses on UDisc Live, which links their scores to the season.
    #[serde(default)]
    pub udisc_display_name: Option<String>,
}

impl UserProfile {
    /// Non-blank display name, if one has been linked.
    pub fn udisc_display_name(&self) -> Option<&str> {
        self.udisc_display_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// Parses the `{ "user": { ... } }` envelope the endpoint responds with.
    pub fn from_response_json(json: &str) -> Result<Self, LeaderboardError> {
        #[derive(Deserialize)]
        struct Envelope {
            user: UserProfile,
        }
        Ok(serde_json::from_str::<Envelope>(json)?.user)
    }
}

/// Request body for the user-details lookup.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct UserDetailsRequest<'a> {
    pub kinde_id: &'a str,
}

/// Fetches profiles from the tags API.
///
/// Implementations report transport or server failures as `UpstreamUnavailable`.
pub trait UserProfileClient {
    fn user_details(&self, request: &UserDetailsRequest<'_>) -> Result<UserProfile, LeaderboardError>;
}

/// Loads the signed-in user's profile for the settings screen.
pub fn load_user_profile<C: UserProfileClient>(
    client: &C,
    auth: Option<&AuthContext>,
) -> Result<UserProfile, LeaderboardError> {
    let auth = auth.ok_or_else(|| {
        LeaderboardError::Unauthorized("You must be logged in to view settings.".to_string())
    })?;
    let request = UserDetailsRequest {
        kinde_id: &auth.user_id,
    };
    client.user_details(&request).map_err(|err| {
        log::warn!("Failed to fetch UDisc display name status for {}: {}", auth.user_id, err);
        match err {
            LeaderboardError::Unauthorized(_) | LeaderboardError::UpstreamUnavailable(_) => err,
            other => LeaderboardError::UpstreamUnavailable(format!(
                "Failed to fetch UDisc display name status: {}",
                other
            )),
        }
    })
}
