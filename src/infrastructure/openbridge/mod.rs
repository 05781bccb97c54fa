//! OpenBridge HTTP 협력자 구현.
//! 토큰 발급 엔드포인트와 브리지 관리 API를 포트 인터페이스 뒤에 둔다.

pub mod api;
pub mod auth;
pub mod disabled;
pub mod http;

pub use api::HttpBridgeApiService;
pub use auth::HttpBridgeAuthService;
pub use disabled::UnconfiguredBridgeService;
