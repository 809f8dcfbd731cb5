//! Model types for the GitHub v3 resources this crate covers.
//!
//! Wire field names are declared explicitly on each member, so the
//! mapping is a compile-time table rather than a runtime case
//! transform. Response models are read-only; request models control
//! exactly which absent members are omitted and which publish an
//! explicit `null`.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use hubwire_core::{comma_separated, github_enum};

github_enum! {
    /// The kind of account behind a profile.
    pub enum AccountType {
        User,
        Organization,
        Bot,
    }
}

/// A GitHub user profile.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    /// The login name.
    pub login: String,
    /// Unique id.
    pub id: u64,
    /// Avatar image URL.
    pub avatar_url: Option<String>,
    /// API URL for this user.
    pub url: String,
    /// Web profile URL.
    pub html_url: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Company.
    pub company: Option<String>,
    /// Blog URL.
    pub blog: Option<String>,
    /// Location.
    pub location: Option<String>,
    /// Public email address.
    pub email: Option<String>,
    /// Whether the user is available for hire.
    pub hireable: Option<bool>,
    /// Profile bio.
    pub bio: Option<String>,
    /// Number of public repositories.
    #[serde(default)]
    pub public_repos: u32,
    /// Number of public gists.
    #[serde(default)]
    pub public_gists: u32,
    /// Number of followers.
    #[serde(default)]
    pub followers: u32,
    /// Number of accounts followed.
    #[serde(default)]
    pub following: u32,
    /// When the account was created.
    pub created_at: DateTime<FixedOffset>,
    /// Account kind.
    #[serde(rename = "type")]
    pub account_type: Option<AccountType>,
    /// Billing plan, only visible on the authenticated user.
    pub plan: Option<Plan>,
}

/// A user's billing plan.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Plan {
    /// Plan name.
    pub name: String,
    /// Storage space.
    pub space: u64,
    /// Number of collaborators allowed.
    pub collaborators: u32,
    /// Number of private repositories allowed.
    pub private_repos: u32,
}

/// Fields to change on the authenticated user.
///
/// Absent members are omitted from the serialized body, except
/// `hireable`, which always publishes (an explicit `null` clears the
/// flag server-side).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New public email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New blog URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog: Option<String>,
    /// New company.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// New location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// New availability-for-hire flag. Always published.
    pub hireable: Option<bool>,
    /// New profile bio.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// The OAuth application an authorization was granted to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Application {
    /// Application name.
    pub name: String,
    /// Application URL.
    pub url: String,
}

/// An OAuth access granted to an application.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Authorization {
    /// Unique id.
    pub id: u64,
    /// API URL for this authorization.
    pub url: String,
    /// The application this authorization belongs to.
    pub app: Application,
    /// The OAuth token. Handle like a password.
    pub token: String,
    /// Free-form note.
    pub note: Option<String>,
    /// URL with more information about the note.
    pub note_url: Option<String>,
    /// Granted scopes. The API may send these as a comma-joined
    /// string.
    #[serde(default, with = "comma_separated")]
    pub scopes: Vec<String>,
    /// When the authorization was created.
    pub created_at: DateTime<FixedOffset>,
    /// When the authorization was last updated.
    pub updated_at: DateTime<FixedOffset>,
}

/// Fields to change on an authorization; also used to create one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationUpdate {
    /// Replace granted scopes with this list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,
    /// New note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// New note URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER_JSON: &str = r#"{
        "login": "octocat",
        "id": 1,
        "avatar_url": "https://github.com/images/error/octocat_happy.gif",
        "url": "https://api.github.com/users/octocat",
        "html_url": "https://github.com/octocat",
        "name": "monalisa octocat",
        "company": "GitHub",
        "blog": "https://github.com/blog",
        "location": "San Francisco",
        "email": "octocat@github.com",
        "hireable": false,
        "bio": "There once was...",
        "public_repos": 2,
        "public_gists": 1,
        "followers": 20,
        "following": 0,
        "created_at": "2008-01-14T04:33:35Z",
        "type": "User",
        "plan": {
            "name": "Medium",
            "space": 400,
            "collaborators": 10,
            "private_repos": 20
        }
    }"#;

    #[test]
    fn user_decodes_from_wire_json() {
        let user: User = hubwire_core::from_json(USER_JSON).expect("decode");

        assert_eq!(user.login, "octocat");
        assert_eq!(user.id, 1);
        assert_eq!(
            user.avatar_url.as_deref(),
            Some("https://github.com/images/error/octocat_happy.gif")
        );
        assert_eq!(user.public_repos, 2);
        assert_eq!(user.account_type, Some(AccountType::User));
        assert_eq!(user.created_at.to_rfc3339(), "2008-01-14T04:33:35+00:00");
        assert_eq!(
            user.plan,
            Some(Plan {
                name: "Medium".to_string(),
                space: 400,
                collaborators: 10,
                private_repos: 20,
            })
        );
    }

    #[test]
    fn user_update_omits_absent_members_but_publishes_hireable() {
        let update = UserUpdate {
            name: Some("monalisa".to_string()),
            ..UserUpdate::default()
        };

        let json = hubwire_core::to_json(&update).expect("serialize");
        assert_eq!(json, r#"{"name":"monalisa","hireable":null}"#);
    }

    #[test]
    fn user_update_round_trips() {
        let update = UserUpdate {
            name: Some("monalisa".to_string()),
            email: Some("octocat@github.com".to_string()),
            hireable: Some(true),
            ..UserUpdate::default()
        };

        let json = hubwire_core::to_json(&update).expect("serialize");
        let back: UserUpdate = hubwire_core::from_json(&json).expect("deserialize");
        assert_eq!(back, update);
    }

    #[test]
    fn authorization_decodes_comma_joined_scopes() {
        let json = r#"{
            "id": 1,
            "url": "https://api.github.com/authorizations/1",
            "app": {"name": "my-app", "url": "https://example.com"},
            "token": "abc123",
            "note": null,
            "note_url": null,
            "scopes": "repo,user",
            "created_at": "2012-09-06T17:26:27Z",
            "updated_at": "2012-09-06T17:26:27Z"
        }"#;

        let auth: Authorization = hubwire_core::from_json(json).expect("decode");
        assert_eq!(auth.scopes, vec!["repo", "user"]);
        assert_eq!(auth.app.name, "my-app");
    }

    #[test]
    fn authorization_update_omits_all_absent_members() {
        let update = AuthorizationUpdate::default();
        let json = hubwire_core::to_json(&update).expect("serialize");
        assert_eq!(json, "{}");
    }
}
