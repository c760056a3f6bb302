use foodgram_shared::user::Role;

use crate::repository::{self, FindType};

impl super::Command {
    pub async fn set_role(&self, id: impl Into<String>, role: Role) -> foodgram_shared::Result<()> {
        let Some(user) = repository::find(&self.read_db, FindType::Id(id.into())).await? else {
            foodgram_shared::not_found!("user");
        };

        if user.role.0 == role {
            return Ok(());
        }

        repository::update_role(&self.write_db, user.id, role).await
    }
}
