use crate::api::Account;

/// Where the admin session stands. Only `AuthenticatedAdmin` opens protected
/// views; every other phase keeps them closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Unknown,
    Verifying,
    AuthenticatedAdmin,
    AuthenticatedNonAdmin,
    Unauthenticated,
}

impl SessionPhase {
    pub fn is_pending(self) -> bool {
        matches!(self, SessionPhase::Unknown | SessionPhase::Verifying)
    }

    pub fn is_authenticated(self) -> bool {
        matches!(
            self,
            SessionPhase::AuthenticatedAdmin | SessionPhase::AuthenticatedNonAdmin
        )
    }
}

/// In-memory session. `account` may be a cached copy shown in the header
/// while verification runs; it carries no authority on its own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub credential: Option<String>,
    pub account: Option<Account>,
    pub phase: SessionPhase,
}

impl Session {
    /// Startup state from whatever was persisted.
    pub fn hydrated(credential: Option<String>, cached_account: Option<Account>) -> Self {
        let credential = credential.filter(|c| !c.trim().is_empty());
        Self {
            account: credential.as_ref().and(cached_account),
            credential,
            phase: SessionPhase::Unknown,
        }
    }

    /// Unknown -> Verifying with a credential, Unknown -> Unauthenticated
    /// without. Returns whether a verification request is needed.
    pub fn begin_verification(&mut self) -> bool {
        if self.phase != SessionPhase::Unknown {
            return false;
        }
        if self.credential.is_some() {
            self.phase = SessionPhase::Verifying;
            true
        } else {
            self.clear();
            false
        }
    }

    /// Applies a verified account. Ignored unless verification is in flight,
    /// so a late answer cannot resurrect a session that was logged out.
    pub fn verified(&mut self, account: Account) {
        if self.phase != SessionPhase::Verifying {
            return;
        }
        self.phase = if account.role.is_admin() {
            SessionPhase::AuthenticatedAdmin
        } else {
            SessionPhase::AuthenticatedNonAdmin
        };
        self.account = Some(account);
    }

    pub fn signed_in(&mut self, credential: String, account: Account) {
        self.credential = Some(credential);
        self.account = Some(account);
        self.phase = SessionPhase::AuthenticatedAdmin;
    }

    pub fn clear(&mut self) {
        self.credential = None;
        self.account = None;
        self.phase = SessionPhase::Unauthenticated;
    }

    pub fn is_admin(&self) -> bool {
        self.phase == SessionPhase::AuthenticatedAdmin
    }
}
