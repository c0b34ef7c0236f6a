//! Read-only view of the session owned by the platform's auth collaborator.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthView {
    pub user: Option<User>,
}

impl AuthView {
    pub fn signed_out() -> Self {
        Self { user: None }
    }

    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user) }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn display_name(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.display_name.as_str())
    }
}
