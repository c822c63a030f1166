use actix_web::{
    http::header::{self, ContentType},
    HttpResponse,
};

/// Response for any method other than GET on a known route
pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed()
        .insert_header((header::ALLOW, "GET"))
        .content_type(ContentType::plaintext())
        .body("Method Not Allowed")
}

/// Default 404 handler
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}

/// Plain-text 500 for when the JSON body itself cannot be produced
pub fn internal_error() -> HttpResponse {
    HttpResponse::InternalServerError()
        .content_type(ContentType::plaintext())
        .body("Internal Server Error")
}
