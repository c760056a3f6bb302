mod list;

use std::ops::Deref;

use crate::AggregateOptions;

#[derive(Clone)]
pub struct Command {
    state: foodgram_shared::State,
    options: AggregateOptions,
    pub cart: crate::cart::Command,
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
            cart: crate::cart::Command(state.clone()),
            options: AggregateOptions::default(),
            state,
        }
    }

    pub fn with_options(mut self, options: AggregateOptions) -> Self {
        self.options = options;
        self
    }
}
