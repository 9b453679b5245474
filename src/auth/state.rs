use crate::core::{Action, State};
use crate::model::User;
use serde::{Deserialize, Serialize};

/// Who is signed in, and whether a sign-in is in flight.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl State for AuthState {
    fn name(&self) -> &str {
        if self.is_loading {
            "Loading"
        } else if self.is_authenticated {
            "Authenticated"
        } else if self.error.is_some() {
            "Failed"
        } else {
            "Anonymous"
        }
    }

    fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AuthAction {
    /// A login or registration request was sent.
    Start,
    Succeeded { user: User, token: String },
    Failed(String),
    Logout,
    ClearError,
}

impl Action for AuthAction {
    fn name(&self) -> &str {
        match self {
            Self::Start => "auth_start",
            Self::Succeeded { .. } => "auth_success",
            Self::Failed(_) => "auth_error",
            Self::Logout => "logout",
            Self::ClearError => "clear_error",
        }
    }
}
