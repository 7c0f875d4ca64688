use sea_orm::{entity::prelude::*, Iterable};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "shows")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub image: Option<String>,
}

#[derive(
    EnumIter, DeriveActiveEnum, Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[sea_orm(string_value = "movie")]
    Movie,
    #[sea_orm(string_value = "anime")]
    Anime,
    #[sea_orm(string_value = "serie")]
    Serie,
}

impl Category {
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Movie => "movie",
            Category::Anime => "anime",
            Category::Serie => "serie",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory;

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("category must be movie, anime, or serie")
    }
}

impl std::error::Error for UnknownCategory {}

/// Matching is exact, `Movie` or ` movie` are rejected.
impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::iter()
            .find(|category| category.as_str() == s)
            .ok_or(UnknownCategory)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
