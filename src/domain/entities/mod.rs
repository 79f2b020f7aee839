//! # Domain Entities Module
//!
//! 카탈로그 서비스의 영구 저장 엔티티를 정의하는 모듈입니다.
//! 모든 엔티티는 [`Entity`] trait을 구현하여 저장소 계층이 타입에 관계없이
//! 동일한 방식으로 식별자를 다룰 수 있게 합니다.
//!
//! ## 엔티티 구성
//!
//! | 엔티티 | 식별자 | 키 종류 |
//! |--------|--------|---------|
//! | [`Movie`] | `mid` | 시스템 생성 정수 |
//! | [`Director`] | `did` | 시스템 생성 정수 |
//! | [`CastMember`] | `cmid` | 시스템 생성 정수 |
//! | [`Studio`] | `sid` | 시스템 생성 정수 |
//! | [`User`] | `username` | 호출자가 지정하는 자연 키 |
//!
//! ## 연관 관계
//!
//! ```text
//! User 1 ──── N Movie N ──── M Director
//!                     N ──── M CastMember
//!                     N ──── M Studio
//! ```
//!
//! 다대다 관계는 엔티티 내부의 역참조 컬렉션이 아니라 [`link`] 모듈의
//! 링크 테이블로 표현합니다. User→Movie 관계는 Movie의 `owner` 외래 키 하나로 표현합니다.

use std::fmt::{Debug, Display};
use std::hash::Hash;
use serde::{de::DeserializeOwned, Serialize};

pub mod cast_member;
pub mod director;
pub mod link;
pub mod movie;
pub mod studio;
pub mod user;

pub use cast_member::CastMember;
pub use director::{Director, PersonDetails};
pub use link::{Link, Relation};
pub use movie::{Movie, MovieDetails};
pub use studio::{Studio, StudioDetails};
pub use user::{User, UserDetails};

/// 영구 저장되는 엔티티의 공통 계약
///
/// 저장소는 이 trait만으로 식별자 할당, 조회 키, 컬렉션 이름을 결정합니다.
/// `Details`는 update 연산에서 복사가 허용된 필드 묶음이며,
/// 식별자와 연관 관계는 포함하지 않습니다.
pub trait Entity:
    Clone + Debug + Serialize + DeserializeOwned + Unpin + Send + Sync + 'static
{
    /// 식별자 타입 (정수 대리 키 또는 문자열 자연 키)
    type Key: Clone + Debug + Display + Eq + Ord + Hash + Serialize + Send + Sync + 'static;

    /// update 시 복사되는 변경 가능 필드 묶음
    type Details: Send + 'static;

    /// 에러 메시지에 쓰이는 엔티티 이름 (예: `Movie`)
    const NAME: &'static str;

    /// 식별자 필드명 (예: `mid`)
    const ID_FIELD: &'static str;

    /// 저장소 컬렉션/테이블 이름
    const COLLECTION: &'static str;

    fn key(&self) -> Option<&Self::Key>;

    fn set_key(&mut self, key: Self::Key);

    /// 시퀀스 값으로 새 식별자를 만듭니다.
    ///
    /// 자연 키 엔티티는 식별자를 생성하지 않으므로 `None`을 반환합니다.
    fn key_from_sequence(sequence: i64) -> Option<Self::Key>;

    /// 허용된 필드만 덮어씁니다.
    fn apply_details(&mut self, details: Self::Details);
}

/// 영화와 다대다 관계를 맺는 엔티티 (감독, 출연진, 스튜디오)
pub trait MovieMember: Entity<Key = i64> {
    /// 이 엔티티와 영화를 잇는 링크 테이블
    const RELATION: Relation;
}
