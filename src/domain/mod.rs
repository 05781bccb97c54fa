//! Domain layer
//! 브리지/토큰/processor 값 객체와 정규화 규칙을 외부 I/O 없이 표현한다.

pub mod bridge;
pub mod processor;
