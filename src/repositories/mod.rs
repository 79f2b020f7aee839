//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 엔티티 저장소와 링크 테이블 저장소의 계약([`store`])과
//! 두 가지 구현(메모리, MongoDB)을 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::{EntityStore, InMemoryStore};
//! use crate::domain::entities::Director;
//!
//! let store = InMemoryStore::<Director>::new();
//! let saved = store.save(Director::new("Chris", "Nolan")).await?;
//! assert_eq!(saved.did, Some(1));
//! ```

pub mod memory;
pub mod mongo;
pub mod store;

pub use memory::{InMemoryLinkStore, InMemoryStore};
pub use mongo::{MongoLinkStore, MongoStore};
pub use store::{EntityStore, LinkStore, MovieStore};
