use clap::ValueEnum;

use crate::config::Config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Role {
    User,
    Admin,
}

impl From<Role> for foodgram_shared::user::Role {
    fn from(value: Role) -> Self {
        match value {
            Role::User => Self::User,
            Role::Admin => Self::Admin,
        }
    }
}

#[tracing::instrument(skip(config))]
pub async fn set_role(config: &Config, email: &str, role: Role) -> anyhow::Result<()> {
    let state = crate::db::create_state(&config.database).await?;
    let command = foodgram_user::Command::new(state);

    let Some(user) = command.find_by_email(email).await? else {
        anyhow::bail!("user {email} not found");
    };

    command.set_role(user.id, role.into()).await?;

    tracing::info!("{email} now has role {role:?}");

    Ok(())
}
