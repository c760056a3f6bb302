use strum::{AsRefStr, Display, EnumString};

#[derive(EnumString, Display, AsRefStr, Clone, Copy, Debug, Default, PartialEq)]
pub enum Role {
    #[default]
    User,
    Admin,
}
