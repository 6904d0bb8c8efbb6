use log::warn;

use crate::records::user::{User, UserType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    StudentSession(User),
    TeacherSession(User),
    /// waiting for the answer to "log out?", after a menu was left or for a
    /// role that has no menu
    AwaitingLogout(User),
    /// input is closed, the loop stops
    Finished,
}

/// What a single step of the session loop produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    LoginAccepted(User),
    LoginRejected,
    MenuExited,
    LogoutConfirmed,
    LogoutDeclined,
    InputClosed,
}

impl SessionState {
    /// The state a freshly authenticated user lands in.
    pub fn for_user(user: User) -> Self {
        match user.user_type {
            UserType::Student => SessionState::StudentSession(user),
            UserType::Teacher => SessionState::TeacherSession(user),
            UserType::Unknown(_) => SessionState::AwaitingLogout(user),
        }
    }

    /// Transition table.
    pub fn next(self, event: Event) -> Self {
        use Event::*;
        use SessionState::*;

        match (self, event) {
            (_, InputClosed) => Finished,
            (LoggedOut, LoginAccepted(user)) => SessionState::for_user(user),
            (LoggedOut, LoginRejected) => LoggedOut,
            (StudentSession(user) | TeacherSession(user), MenuExited) => AwaitingLogout(user),
            (AwaitingLogout(_), LogoutConfirmed) => LoggedOut,
            (AwaitingLogout(user), LogoutDeclined) => SessionState::for_user(user),
            (state, event) => {
                warn!("event {:?} is not expected in state {:?}", event, state);
                state
            }
        }
    }
}
