use actix_web::{get, http::header::ContentType, web, HttpResponse, Responder};
use crate::models::AppState;
use crate::render;

#[get("/")]
pub async fn index(data: web::Data<AppState>) -> impl Responder {
    let page = render::index_page(&data.lists, &data.stats, data.config.env);
    HttpResponse::Ok().content_type(ContentType::html()).body(page.into_string())
}

#[get("/cards")]
pub async fn cards() -> impl Responder {
    HttpResponse::Ok().content_type(ContentType::html()).body(render::cards_page().into_string())
}
