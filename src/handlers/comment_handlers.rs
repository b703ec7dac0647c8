use actix_web::{get, post, web, HttpResponse};

use crate::dtos::comment_dtos::CreateCommentDTO;
use crate::dtos::post_dtos::DeleteDTO;
use crate::dtos::{CreatedOut, SuccessOut};
use crate::error::Result;
use crate::AppState;

#[post("/posts/{id}/comments")]
pub async fn create_comment(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<CreateCommentDTO>,
) -> Result<HttpResponse> {
    let id = state
        .comment_service
        .create(path.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(CreatedOut { id }))
}

#[get("/posts/{id}/comments")]
pub async fn list_comments(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    let comments = state.comment_service.list_by_post(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(comments))
}

#[post("/comments/{comment_id}/delete")]
pub async fn delete_comment(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: Option<web::Json<DeleteDTO>>,
) -> Result<HttpResponse> {
    let password = body.and_then(|b| b.into_inner().password);
    state
        .comment_service
        .delete(path.into_inner(), password.as_deref())
        .await?;
    Ok(HttpResponse::Ok().json(SuccessOut::ok()))
}
