use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum User {
    Table,
    Id,
    Email,
    Username,
    FirstName,
    LastName,
    Role,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum Follow {
    Table,
    FollowerId,
    AuthorId,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum Ingredient {
    Table,
    Id,
    Name,
    MeasurementUnit,
}

#[derive(Iden, Clone)]
pub enum Recipe {
    Table,
    Id,
    AuthorId,
    Name,
    Text,
    CookingTime,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum RecipeIngredient {
    Table,
    RecipeId,
    IngredientId,
    Amount,
}

#[derive(Iden, Clone)]
pub enum Favorite {
    Table,
    UserId,
    RecipeId,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum ShoppingCart {
    Table,
    UserId,
    RecipeId,
    Portions,
    CreatedAt,
}
