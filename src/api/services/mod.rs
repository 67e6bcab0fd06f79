pub mod redirect;
pub mod urls;

use actix_web::HttpResponse;
use actix_web::http::{StatusCode, header};

use crate::api::constants::METHOD_NOT_ALLOWED_BODY;

pub use redirect::{RedirectService, redirect_routes};
pub use urls::{LinkSettings, UrlService, url_routes};

/// 405 响应，`allow` 为该路径支持的方法
#[inline]
pub(crate) fn method_not_allowed_response(allow: &'static str) -> HttpResponse {
    HttpResponse::build(StatusCode::METHOD_NOT_ALLOWED)
        .insert_header((header::ALLOW, allow))
        .content_type("text/plain; charset=utf-8")
        .body(METHOD_NOT_ALLOWED_BODY)
}

#[inline]
pub(crate) fn plain_text_response(status: StatusCode, body: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/plain; charset=utf-8")
        .body(body.into())
}
