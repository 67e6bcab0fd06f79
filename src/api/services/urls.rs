use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, web};
use tracing::{error, info, warn};

use super::{method_not_allowed_response, plain_text_response};
use crate::api::constants::{INTERNAL_ERROR_BODY, URL_FORM_FIELD, URLS_API_PATH};
use crate::errors::CrclinkError;
use crate::storage::UrlStore;
use crate::utils::hash_url;

const CREATE_FORM_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>crclink</title>
</head>
<body>
    <form action="/api/v1/urls" method="POST">
        <input type="text" name="url" id="url">
        <input type="submit" value="submit">
    </form>
</body>
</html>
"#;

/// Short link rendering settings, built from `server.public_base_url`.
#[derive(Clone, Debug)]
pub struct LinkSettings {
    public_base_url: String,
}

impl LinkSettings {
    pub fn new(public_base_url: impl Into<String>) -> Self {
        let mut public_base_url = public_base_url.into();
        while public_base_url.ends_with('/') {
            public_base_url.pop();
        }
        Self { public_base_url }
    }

    pub fn short_link(&self, id: &str) -> String {
        format!("{}/{}", self.public_base_url, id)
    }
}

/// 表单中的 `url` 字段：不校验格式，重复时取第一个，缺省时按空字符串处理
fn first_url_field(fields: Vec<(String, String)>) -> String {
    fields
        .into_iter()
        .find(|(key, _)| key == URL_FORM_FIELD)
        .map(|(_, value)| value)
        .unwrap_or_default()
}

pub struct UrlService {}

impl UrlService {
    pub async fn create_form() -> HttpResponse {
        HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(CREATE_FORM_HTML)
    }

    pub async fn create_url(
        form: web::Form<Vec<(String, String)>>,
        store: web::Data<Arc<dyn UrlStore>>,
        settings: web::Data<LinkSettings>,
    ) -> HttpResponse {
        let url = first_url_field(form.into_inner());
        let id = hash_url(&url);

        match store.set(&id, &url).await {
            Ok(()) => {
                info!("Short link created: {} -> {}", id, url);
                plain_text_response(StatusCode::OK, settings.short_link(&id))
            }
            Err(CrclinkError::UniqueViolation(_)) => {
                Self::resolve_existing(store.get_ref(), &settings, &id, &url).await
            }
            Err(e) => {
                error!("Failed to store short link {}: {}", id, e);
                plain_text_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY)
            }
        }
    }

    /// id 已存在：同一 URL 重复提交时返回原链接，否则为 CRC32 碰撞
    async fn resolve_existing(
        store: &Arc<dyn UrlStore>,
        settings: &LinkSettings,
        id: &str,
        url: &str,
    ) -> HttpResponse {
        match store.get(id).await {
            Ok(existing) if existing == url => {
                plain_text_response(StatusCode::OK, settings.short_link(id))
            }
            Ok(existing) => {
                warn!(
                    "Hash collision on {}: stored {:?}, submitted {:?}",
                    id, existing, url
                );
                plain_text_response(
                    StatusCode::CONFLICT,
                    format!("id {} is already taken by a different URL", id),
                )
            }
            Err(e) => {
                error!("Failed to read existing short link {}: {}", id, e);
                plain_text_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY)
            }
        }
    }
}

/// 创建接口路由配置
pub fn url_routes() -> actix_web::Resource {
    web::resource(URLS_API_PATH)
        .route(web::get().to(UrlService::create_form))
        .route(web::post().to(UrlService::create_url))
        .default_service(web::route().to(|| async { method_not_allowed_response("GET, POST") }))
}
