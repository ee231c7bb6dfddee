use uuid::Uuid;

pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user_id: Uuid,
    pub access_token: String,
    /// Unix seconds
    pub expires_at: Option<u64>,
}

impl Session {
    pub fn is_expired(&self, now: u64) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }
}

/// Notifications pushed by the backend's auth client.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthEvent {
    SignedIn(Session),
    TokenRefreshed(Session),
    SignedOut,
}

/// Session as seen by the admin route, `Loading` until the first lookup
/// resolves.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum AuthState {
    #[default]
    Loading,
    Resolved(Option<Session>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Pending,
    Allow,
    Redirect(&'static str),
}

impl AuthState {
    pub fn apply(&mut self, event: AuthEvent) {
        *self = match event {
            AuthEvent::SignedIn(session) | AuthEvent::TokenRefreshed(session) => {
                AuthState::Resolved(Some(session))
            }
            AuthEvent::SignedOut => AuthState::Resolved(None),
        };
    }

    /// Decision for the admin dashboard route.
    pub fn admin_access(&self, now: u64) -> Access {
        match self {
            AuthState::Loading => Access::Pending,
            AuthState::Resolved(Some(session)) if !session.is_expired(now) => Access::Allow,
            AuthState::Resolved(_) => Access::Redirect(LOGIN_PATH),
        }
    }
}
