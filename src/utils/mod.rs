//! 공통 유틸리티 모듈
//!
//! - [`string_utils`]: 입력 문자열 정리, 정규식 이스케이프, 쿼리 문자열 분해
//! - [`display_terminal`]: 레지스트리 초기화 과정 터미널 출력

pub mod string_utils;
pub mod display_terminal;
