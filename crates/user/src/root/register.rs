use regex::Regex;
use std::sync::LazyLock;
use validator::Validate;

use crate::repository::{self, FindType};

static RE_USERNAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\w.@+-]+$").unwrap());

#[derive(Validate)]
pub struct RegisterInput {
    #[validate(email, length(max = 254))]
    pub email: String,
    #[validate(length(min = 1, max = 128), regex(path = *RE_USERNAME, message = "Only letters, digits and @/./+/-/_ are allowed."))]
    pub username: String,
    #[validate(length(min = 1, max = 128))]
    pub first_name: String,
    #[validate(length(min = 1, max = 128))]
    pub last_name: String,
}

impl super::Command {
    pub async fn register(&self, input: RegisterInput) -> foodgram_shared::Result<String> {
        input.validate()?;

        if repository::find(&self.read_db, FindType::Email(input.email.to_owned()))
            .await?
            .is_some()
        {
            foodgram_shared::user!("Email already exists");
        }

        if repository::find(&self.read_db, FindType::Username(input.username.to_owned()))
            .await?
            .is_some()
        {
            foodgram_shared::user!("Username already exists");
        }

        let id = foodgram_shared::new_id();

        repository::create(
            &self.write_db,
            repository::CreateInput {
                id: id.to_owned(),
                email: input.email,
                username: input.username,
                first_name: input.first_name,
                last_name: input.last_name,
            },
        )
        .await?;

        tracing::info!(user.id = %id, "user registered");

        Ok(id)
    }
}
