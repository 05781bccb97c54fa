//! oblink library root.
//! OpenBridge 브리지 탐색/인증 어댑터를 Clean Architecture 계층으로 노출한다.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

pub use application::bridge_helper::BridgeHelper;
pub use application::error::BridgeError;
pub use domain::bridge::{AuthToken, Bridge};
