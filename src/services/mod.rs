//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 엔티티별 서비스는 공통 CRUD 흐름([`crud::EntityCrud`])과
//! 연관 관계 관리자([`association_manager::AssociationManager`])를 조합해 구성됩니다.
//! 인스턴스 생성과 연결은 [`crate::core::container::ServiceContainer`]가 담당합니다.
//!
//! # Features
//!
//! - 엔티티 조회/생성/수정/삭제 (없는 식별자는 NotFound)
//! - 부모 엔티티 기준 조회 및 생성 (영화→멤버, 사용자→영화)
//! - 삭제 시 링크 행 정리
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::core::container::ServiceContainer;
//! use crate::domain::entities::{Director, Movie};
//!
//! let container = ServiceContainer::in_memory();
//! let movie = container.movies.create(Movie::new("Inception")).await?;
//! let director = container.directors
//!     .create_for_movie(movie.mid.unwrap_or_default(), Director::new("Chris", "Nolan"))
//!     .await?;
//! ```

pub mod association_manager;
pub mod crud;
pub mod members;
pub mod movies;
pub mod users;

pub use association_manager::{AssociationManager, LinkOutcome, LinkedMember, PendingLink};
pub use members::{CastMemberService, DirectorService, MemberService, StudioService};
pub use movies::MovieService;
pub use users::UserService;
