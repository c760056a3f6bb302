mod favorite;
mod follow;
mod ingredient;
mod recipe;
mod recipe_ingredient;
mod shopping_cart;
mod user;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "foodgram",
    "m0001",
    vec_box![],
    vec_box![
        user::CreateTable,
        user::CreateIdx1,
        user::CreateIdx2,
        follow::CreateTable,
        follow::CreateIdx1,
        ingredient::CreateTable,
        ingredient::CreateIdx1,
        recipe::CreateTable,
        recipe::CreateIdx1,
        recipe::CreateIdx2,
        recipe_ingredient::CreateTable,
        recipe_ingredient::CreateIdx1,
        favorite::CreateTable,
        favorite::CreateIdx1,
        shopping_cart::CreateTable,
        shopping_cart::CreateIdx1
    ]
);
