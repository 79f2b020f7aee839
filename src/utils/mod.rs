//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 요청 DTO 문자열 검증, 정리
//! - [`display_terminal`] - 시작 화면 (배너, 저장소, 리소스 목록)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::validate_required_string;
//! use crate::utils::display_terminal::print_banner;
//!
//! let title = validate_required_string("  Inception  ", "title")?;
//! print_banner("MOVIE CATALOG BACKEND");
//! ```

pub mod string_utils;
pub mod display_terminal;
