use std::sync::Arc;

use actix_web::http::header::{self, HeaderValue};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};
use percent_encoding::{CONTROLS, utf8_percent_encode};
use tracing::{debug, error, trace};

use super::{method_not_allowed_response, plain_text_response};
use crate::api::constants::{INTERNAL_ERROR_BODY, NOT_FOUND_BODY, REDIRECT_QUERY_PARAM};
use crate::errors::CrclinkError;
use crate::storage::UrlStore;
use crate::utils::IdValidator;

pub struct RedirectService {}

impl RedirectService {
    pub async fn handle_redirect(
        req: HttpRequest,
        store: web::Data<Arc<dyn UrlStore>>,
        validator: web::Data<IdValidator>,
    ) -> HttpResponse {
        // 已解码的路径（不含开头的 `/`）
        let path = req.match_info().query("path");
        let id = match validator.parse(path) {
            Ok(id) => id,
            Err(e) => {
                // 非法 id，直接 404，不查库
                trace!("Rejected redirect path /{}: {}", path, e);
                return Self::not_found_response();
            }
        };

        match store.get(id).await {
            Ok(target) => {
                if Self::wants_redirect(req.query_string()) {
                    debug!("Redirecting {} -> {}", id, target);
                    Self::finish_redirect(&target)
                } else {
                    plain_text_response(StatusCode::OK, target)
                }
            }
            Err(CrclinkError::NotFound(_)) => {
                debug!("Redirect id not found: {}", id);
                Self::not_found_response()
            }
            Err(e) => {
                // 存储故障对客户端同样表现为 404
                error!("Database error during redirect lookup: {}", e);
                Self::not_found_response()
            }
        }
    }

    /// `?redirect=false`（值不区分大小写）关闭跳转；取第一个同名参数
    #[inline]
    fn wants_redirect(query: &str) -> bool {
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == REDIRECT_QUERY_PARAM)
            .is_none_or(|(_, value)| !value.eq_ignore_ascii_case("false"))
    }

    #[inline]
    fn not_found_response() -> HttpResponse {
        plain_text_response(StatusCode::NOT_FOUND, NOT_FOUND_BODY)
    }

    /// 目标 URL 含控制字符时无法直接作为头部值，按百分号编码后再写入
    fn location_value(target: &str) -> Option<HeaderValue> {
        HeaderValue::from_str(target).ok().or_else(|| {
            let escaped = utf8_percent_encode(target, CONTROLS).to_string();
            HeaderValue::from_str(&escaped).ok()
        })
    }

    fn finish_redirect(target: &str) -> HttpResponse {
        match Self::location_value(target) {
            Some(location) => HttpResponse::build(StatusCode::FOUND)
                .insert_header((header::LOCATION, location))
                .finish(),
            None => {
                error!("Cannot build Location header for {:?}", target);
                plain_text_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY)
            }
        }
    }
}

/// Redirect 路由配置，需在其他路由之后注册
pub fn redirect_routes() -> actix_web::Resource {
    web::resource("/{path:.*}")
        .route(web::get().to(RedirectService::handle_redirect))
        .default_service(web::route().to(|| async { method_not_allowed_response("GET") }))
}
