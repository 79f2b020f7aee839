//! 공통 응답 DTO

use serde::{Deserialize, Serialize};

/// 삭제 성공 응답 (`{"deleted": true}`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub deleted: bool,
}

impl DeletedResponse {
    pub fn deleted() -> Self {
        Self { deleted: true }
    }
}
