//! 다대다 링크 테이블 정의
//!
//! 영화와 감독/출연진/스튜디오 사이의 연결을 `(mid, member)` 쌍으로 표현합니다.
//! 같은 행을 양쪽에서 조회하므로 한쪽만 갱신되는 상태가 존재하지 않습니다.

use serde::{Deserialize, Serialize};

/// 영화 기준 다대다 관계 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Relation {
    MovieDirector,
    MovieCastMember,
    MovieStudio,
}

impl Relation {
    pub const ALL: [Relation; 3] = [
        Relation::MovieDirector,
        Relation::MovieCastMember,
        Relation::MovieStudio,
    ];

    /// 링크 테이블(컬렉션) 이름
    pub fn table(&self) -> &'static str {
        match self {
            Relation::MovieDirector => "movie_director",
            Relation::MovieCastMember => "movie_cast_member",
            Relation::MovieStudio => "movie_studio",
        }
    }

    /// 영화 반대편 엔티티의 키 컬럼명
    pub fn member_field(&self) -> &'static str {
        match self {
            Relation::MovieDirector => "did",
            Relation::MovieCastMember => "cmid",
            Relation::MovieStudio => "sid",
        }
    }
}

/// 링크 테이블의 한 행
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Link {
    pub mid: i64,
    pub member: i64,
}

impl Link {
    pub fn new(mid: i64, member: i64) -> Self {
        Self { mid, member }
    }
}
