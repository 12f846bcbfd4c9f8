// HTTP middleware
// Author: kelexine (https://github.com/kelexine)

use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

/// Request ID layers: generate `x-request-id` and echo it on the response
pub fn request_id_layers() -> (SetRequestIdLayer<MakeRequestUuid>, PropagateRequestIdLayer) {
    (
        SetRequestIdLayer::x_request_id(MakeRequestUuid),
        PropagateRequestIdLayer::x_request_id(),
    )
}

/// The browser front-end may be served from another origin
pub fn cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
