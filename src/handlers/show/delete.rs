use crate::{
    error::{self, Result},
    validation::{self, Rule},
    StateTrait,
};
use axum::{
    extract::{Path, State},
    Json,
};
use entity::shows;
use sea_orm::EntityTrait;
use serde_json::{json, Value};

const RULES: &[Rule<str>] = &[Rule::params(
    "id",
    validation::is_integer,
    "ID must be an integer",
)];

pub async fn delete_show<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    validation::validate(id.as_str(), RULES)?;

    // Integers outside the column range cannot match a row.
    let Ok(id) = id.parse::<i32>() else {
        return Err(error::SHOW_NOT_FOUND);
    };

    let res = shows::Entity::delete_by_id(id).exec(state.db()).await?;

    if res.rows_affected == 0 {
        return Err(error::SHOW_NOT_FOUND);
    }

    info!("deleted show {}", id);

    Ok(Json(json!({ "message": "Show deleted successfully" })))
}
