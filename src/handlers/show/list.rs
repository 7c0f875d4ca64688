use super::Response;
use crate::{error::Result, StateTrait};
use axum::{extract::State, Json};
use entity::shows;
use sea_orm::{EntityTrait, QueryOrder};

pub async fn list_shows<S: StateTrait>(State(state): State<S>) -> Result<Json<Vec<Response>>> {
    let res = shows::Entity::find()
        .order_by_asc(shows::Column::Id)
        .into_model::<Response>()
        .all(state.db())
        .await?;

    Ok(Json(res))
}
