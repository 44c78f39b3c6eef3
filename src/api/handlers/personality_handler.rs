use axum::{Json, extract::State, response::IntoResponse};

use crate::{
    api::{app_state::AppState, dto::personality_dto::*},
    models::personality::PersonalityKey,
};

pub async fn list_personalities(State(state): State<AppState>) -> impl IntoResponse {
    let catalog = state.gateway.selector().table().catalog();

    let response = PersonalityListResponse {
        personalities: catalog.iter().map(|(key, _)| key.clone()).collect(),
        details: catalog
            .into_iter()
            .map(|(key, profile)| (key.to_string(), profile))
            .collect(),
        current: PersonalityKey::default(),
    };

    Json(response)
}
