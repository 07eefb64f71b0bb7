//! Identity of the acting user.
//!
//! The access token is decoded once at the application root into an [`Identity`] which
//! is then shared with every component that needs the user's id or role. Components
//! match on [`Identity::Anonymous`] instead of probing for missing values.

pub mod claims;
pub mod cookie;
pub mod guard;

use chrono::{DateTime, Utc};
use dioxus_logger::tracing;

use crate::{
    error::identity::IdentityError,
    model::user::Role,
    session::claims::{decode_claims, Claims},
};

/// A signed in user as described by their access token
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub user_id: i64,
    pub subject: String,
    pub role: Role,
    pub user_name: String,
    pub expires_at: Option<DateTime<Utc>>,
    token: String,
}

impl Session {
    /// Decode a session from an access token
    pub fn from_token(token: &str) -> Result<Self, IdentityError> {
        let Claims {
            sub,
            role,
            user_id,
            user_name,
            exp,
        } = decode_claims(token)?;

        Ok(Self {
            user_id,
            subject: sub,
            role,
            user_name,
            expires_at: exp.and_then(|exp| DateTime::from_timestamp(exp, 0)),
            token: token.trim().to_string(),
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Whether the token's expiry has passed, tokens without expiry never expire
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Identity {
    Authenticated(Session),
    #[default]
    Anonymous,
}

impl Identity {
    /// Resolve the identity for an optional access token.
    ///
    /// A missing or undecodable token yields [`Identity::Anonymous`].
    pub fn from_token(token: Option<&str>) -> Self {
        let Some(token) = token.filter(|token| !token.trim().is_empty()) else {
            return Self::Anonymous;
        };

        match Session::from_token(token) {
            Ok(session) => {
                tracing::debug!(
                    user_id = %session.user_id,
                    role = %session.role,
                    "Resolved identity from access token"
                );

                Self::Authenticated(session)
            }
            Err(e) => {
                tracing::warn!("Treating user as anonymous: {}", e);

                Self::Anonymous
            }
        }
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            Self::Anonymous => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.session().map(Session::token)
    }

    pub fn user_id(&self) -> Option<i64> {
        self.session().map(|session| session.user_id)
    }

    pub fn role(&self) -> Option<Role> {
        self.session().map(|session| session.role)
    }

    pub fn display_name(&self) -> Option<&str> {
        self.session().map(|session| session.user_name.as_str())
    }

    /// The session of a signed in user holding `role`
    pub fn require_role(&self, role: Role) -> Result<&Session, IdentityError> {
        let session = self.session().ok_or(IdentityError::Unauthenticated)?;

        if session.role != role {
            return Err(IdentityError::WrongRole {
                expected: role,
                actual: session.role,
            });
        }

        Ok(session)
    }
}
