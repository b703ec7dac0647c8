// src/handlers/post_handlers.rs
use actix_web::{get, post, web, HttpResponse};

use crate::dtos::post_dtos::{CreatePostDTO, DeleteDTO};
use crate::dtos::{CreatedOut, SuccessOut};
use crate::error::Result;
use crate::AppState;

#[post("/posts")]
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostDTO>,
) -> Result<HttpResponse> {
    let id = state.post_service.create(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(CreatedOut { id }))
}

#[get("/posts")]
pub async fn list_posts(state: web::Data<AppState>) -> Result<HttpResponse> {
    let posts = state.post_service.list().await?;
    Ok(HttpResponse::Ok().json(posts))
}

#[get("/posts/{id}")]
pub async fn get_post(state: web::Data<AppState>, path: web::Path<i32>) -> Result<HttpResponse> {
    let post = state.post_service.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// A missing or unparsable body is treated as "no password", which never matches.
#[post("/posts/{id}/delete")]
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: Option<web::Json<DeleteDTO>>,
) -> Result<HttpResponse> {
    let password = body.and_then(|b| b.into_inner().password);
    state
        .post_service
        .delete(path.into_inner(), password.as_deref())
        .await?;
    Ok(HttpResponse::Ok().json(SuccessOut::ok()))
}
