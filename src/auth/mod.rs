//! Authentication state.
//!
//! [`AuthReducer`] is the pure transition table behind sign-in, sign-up and
//! sign-out. The side of authentication that talks to the network and to
//! storage lives in [`crate::session`].

mod state;
mod token;

pub use state::{AuthAction, AuthState};
pub use token::{bearer_header, is_token_valid, token_expiry};

#[cfg(test)]
pub(crate) use token::make_token;

use crate::core::Reducer;

#[derive(Clone, Copy, Debug, Default)]
pub struct AuthReducer;

impl Reducer for AuthReducer {
    type State = AuthState;
    type Action = AuthAction;

    fn initial(&self) -> AuthState {
        AuthState::default()
    }

    fn reduce(&self, state: &AuthState, action: AuthAction) -> AuthState {
        match action {
            AuthAction::Start => AuthState {
                is_loading: true,
                error: None,
                ..state.clone()
            },
            AuthAction::Succeeded { user, token } => AuthState {
                user: Some(user),
                token: Some(token),
                is_authenticated: true,
                is_loading: false,
                error: None,
            },
            AuthAction::Failed(message) => AuthState {
                user: None,
                token: None,
                is_authenticated: false,
                is_loading: false,
                error: Some(message),
            },
            AuthAction::Logout => AuthState::default(),
            AuthAction::ClearError => AuthState {
                error: None,
                ..state.clone()
            },
        }
    }
}
