use std::ops::Deref;

use crate::repository::{self, FindType, User};

mod register;
mod set_role;

pub use register::RegisterInput;

#[derive(Clone)]
pub struct Command {
    state: foodgram_shared::State,
    pub follow: crate::follow::Command,
}

impl Deref for Command {
    type Target = foodgram_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl Command {
    pub fn new(state: foodgram_shared::State) -> Self {
        Self {
            follow: crate::follow::Command(state.clone()),
            state,
        }
    }

    pub async fn find(&self, id: impl Into<String>) -> foodgram_shared::Result<Option<User>> {
        repository::find(&self.read_db, FindType::Id(id.into())).await
    }

    pub async fn find_by_email(
        &self,
        email: impl Into<String>,
    ) -> foodgram_shared::Result<Option<User>> {
        repository::find(&self.read_db, FindType::Email(email.into())).await
    }
}
