use crate::{
    error::ApiError,
    models::{
        timestamp_now, CaptionResponse, GenerationRequest, ImageResponse, PostContext,
        PostResponse,
    },
    server::AppState,
};
use actix_web::{http::Method, web, HttpResponse};
use serde_json::json;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .service(post_only("/api/generate-post", generate_post))
        .service(post_only("/api/generate-image", generate_image))
        .service(post_only("/api/generate-caption", generate_caption));
}

/// A resource answering POST with `handler`, OPTIONS with an empty 200 and
/// anything else with 405.
fn post_only<F, Fut>(path: &str, handler: F) -> actix_web::Resource
where
    F: Fn(web::Data<AppState>, web::Bytes) -> Fut + Clone + 'static,
    Fut: std::future::Future<Output = Result<HttpResponse, ApiError>> + 'static,
{
    web::resource(path)
        .route(web::post().to(handler))
        .route(web::method(Method::OPTIONS).to(preflight))
        .default_service(web::to(method_not_allowed))
}

async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

async fn method_not_allowed() -> Result<HttpResponse, ApiError> {
    Err(ApiError::MethodNotAllowed)
}

fn parse_context(body: &[u8]) -> Result<PostContext, ApiError> {
    let request: GenerationRequest = if body.iter().all(u8::is_ascii_whitespace) {
        GenerationRequest::default()
    } else {
        serde_json::from_slice(body).map_err(|e| ApiError::InvalidBody(e.to_string()))?
    };

    request.validate().map_err(|err| {
        log::info!("Rejected request: {}", err);
        err
    })
}

async fn generate_post(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let context = parse_context(&body)?;
    log::info!(
        "[req:{}] 📝 Generating {} post (tone: {}) for topic '{}'",
        context.request_id,
        context.platform,
        context.tone,
        context.topic
    );

    let post = state.generator.generate_post(&context).await.map_err(|e| {
        log::error!("[req:{}] Post generation failed: {}", context.request_id, e);
        ApiError::Internal(e)
    })?;

    Ok(HttpResponse::Ok().json(PostResponse {
        success: true,
        image_url: post.image_url,
        caption: post.caption,
        platform: context.platform,
        tone: context.tone,
        timestamp: timestamp_now(),
        degraded: state.report_degraded.then_some(post.degraded),
    }))
}

async fn generate_image(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let context = parse_context(&body)?;
    log::info!(
        "[req:{}] 🎨 Generating {} image for topic '{}'",
        context.request_id,
        context.platform,
        context.topic
    );

    let image = state.generator.generate_image(&context).await;
    let degraded = image.is_degraded();
    let image_url = image.into_content().map_err(ApiError::Internal)?;

    Ok(HttpResponse::Ok().json(ImageResponse {
        success: true,
        image_url,
        platform: context.platform,
        timestamp: timestamp_now(),
        degraded: state.report_degraded.then_some(degraded),
    }))
}

async fn generate_caption(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let context = parse_context(&body)?;
    log::info!(
        "[req:{}] ✍️  Generating {} caption for topic '{}'",
        context.request_id,
        context.platform,
        context.topic
    );

    let caption = state.generator.generate_caption(&context).await;
    let degraded = caption.is_degraded();
    let caption = caption.into_content().map_err(ApiError::Internal)?;

    Ok(HttpResponse::Ok().json(CaptionResponse {
        success: true,
        caption,
        platform: context.platform,
        tone: context.tone,
        timestamp: timestamp_now(),
        degraded: state.report_degraded.then_some(degraded),
    }))
}

async fn health(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "imageBackend": state.generator.image().backend_name().unwrap_or("fallback"),
        "captionBackend": state.generator.caption().backend_name().unwrap_or("fallback"),
    }))
}
