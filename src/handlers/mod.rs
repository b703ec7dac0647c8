pub mod comment_handlers;
pub mod post_handlers;
pub mod upload_handlers;

use actix_web::web;
use log::warn;

use crate::error::AppError;

pub const MALFORMED_BODY: &str = "잘못된 요청 형식";

/// Registers every route plus the JSON error policy. Shared by the server
/// binary and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        warn!("rejected JSON body: {}", err);
        AppError::BadRequest(MALFORMED_BODY).into()
    }))
    .service(
        web::scope("/api")
            .service(upload_handlers::upload_image)      // POST /api/upload
            .service(post_handlers::create_post)         // POST /api/posts
            .service(post_handlers::list_posts)          // GET  /api/posts
            .service(post_handlers::get_post)            // GET  /api/posts/{id}
            .service(post_handlers::delete_post)         // POST /api/posts/{id}/delete
            .service(comment_handlers::create_comment)   // POST /api/posts/{id}/comments
            .service(comment_handlers::list_comments)    // GET  /api/posts/{id}/comments
            .service(comment_handlers::delete_comment),  // POST /api/comments/{comment_id}/delete
    )
    .service(upload_handlers::serve_upload);             // GET  /uploads/{filename}
}
