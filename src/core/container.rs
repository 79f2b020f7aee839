//! # Service Container
//!
//! 저장소와 서비스 인스턴스를 한 곳에서 생성하고 연결하는 명시적 컨테이너입니다.
//!
//! 전역 상태를 두지 않고, 애플리케이션 시작 시 한 번 만든 컨테이너를
//! Actix-web의 `app_data`로 등록해 핸들러가 `web::Data<T>`로 서비스를 받도록 합니다.
//!
//! ## 구성 순서
//!
//! ```text
//! Stores (memory | mongo)
//!   └─ AssociationManager(links, movies)
//!        ├─ UserService
//!        │    └─ MovieService
//!        │         ├─ DirectorService
//!        │         ├─ CastMemberService
//!        │         └─ StudioService
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::container::ServiceContainer;
//!
//! let container = ServiceContainer::in_memory();
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .configure(|cfg| container.register(cfg))
//!         .configure(configure_all_routes)
//! })
//! ```

use std::sync::Arc;
use actix_web::web;
use log::info;
use crate::core::errors::AppResult;
use crate::db::Database;
use crate::domain::entities::{CastMember, Director, Movie, Studio, User};
use crate::repositories::{
    EntityStore, InMemoryLinkStore, InMemoryStore, LinkStore, MongoLinkStore, MongoStore, MovieStore,
};
use crate::services::{
    AssociationManager, CastMemberService, DirectorService, MovieService, StudioService, UserService,
};

/// 엔티티별 저장소 묶음
struct Stores {
    users: Arc<dyn EntityStore<User>>,
    movies: Arc<dyn MovieStore>,
    directors: Arc<dyn EntityStore<Director>>,
    cast_members: Arc<dyn EntityStore<CastMember>>,
    studios: Arc<dyn EntityStore<Studio>>,
    links: Arc<dyn LinkStore>,
}

/// 애플리케이션 서비스 컨테이너
#[derive(Clone)]
pub struct ServiceContainer {
    pub associations: Arc<AssociationManager>,
    pub users: Arc<UserService>,
    pub movies: Arc<MovieService>,
    pub directors: Arc<DirectorService>,
    pub cast_members: Arc<CastMemberService>,
    pub studios: Arc<StudioService>,
}

impl ServiceContainer {
    /// 프로세스 메모리 저장소로 구성합니다.
    pub fn in_memory() -> Self {
        info!("메모리 저장소로 서비스 구성");

        Self::wire(Stores {
            users: Arc::new(InMemoryStore::<User>::new()),
            movies: Arc::new(InMemoryStore::<Movie>::new()),
            directors: Arc::new(InMemoryStore::<Director>::new()),
            cast_members: Arc::new(InMemoryStore::<CastMember>::new()),
            studios: Arc::new(InMemoryStore::<Studio>::new()),
            links: Arc::new(InMemoryLinkStore::new()),
        })
    }

    /// MongoDB 저장소로 구성합니다.
    ///
    /// 각 컬렉션의 유니크 인덱스를 생성한 뒤 서비스를 연결합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(ServiceContainer)` - 구성된 컨테이너
    /// * `Err(AppError::DatabaseError)` - 인덱스 생성 실패
    pub async fn with_mongo(db: Arc<Database>) -> AppResult<Self> {
        info!("MongoDB 저장소로 서비스 구성: {}", db.database_name());

        let users = MongoStore::<User>::new(db.clone());
        let movies = MongoStore::<Movie>::new(db.clone());
        let directors = MongoStore::<Director>::new(db.clone());
        let cast_members = MongoStore::<CastMember>::new(db.clone());
        let studios = MongoStore::<Studio>::new(db.clone());
        let links = MongoLinkStore::new(db);

        users.create_indexes().await?;
        movies.create_indexes().await?;
        directors.create_indexes().await?;
        cast_members.create_indexes().await?;
        studios.create_indexes().await?;
        links.create_indexes().await?;

        Ok(Self::wire(Stores {
            users: Arc::new(users),
            movies: Arc::new(movies),
            directors: Arc::new(directors),
            cast_members: Arc::new(cast_members),
            studios: Arc::new(studios),
            links: Arc::new(links),
        }))
    }

    fn wire(stores: Stores) -> Self {
        let associations = Arc::new(AssociationManager::new(stores.links, stores.movies.clone()));
        let users = Arc::new(UserService::new(stores.users, associations.clone()));
        let movies = Arc::new(MovieService::new(stores.movies, users.clone(), associations.clone()));

        Self {
            directors: Arc::new(DirectorService::new(stores.directors, movies.clone(), associations.clone())),
            cast_members: Arc::new(CastMemberService::new(stores.cast_members, movies.clone(), associations.clone())),
            studios: Arc::new(StudioService::new(stores.studios, movies.clone(), associations.clone())),
            associations,
            users,
            movies,
        }
    }

    /// 모든 서비스를 `web::Data`로 등록합니다.
    pub fn register(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::from(self.users.clone()))
            .app_data(web::Data::from(self.movies.clone()))
            .app_data(web::Data::from(self.directors.clone()))
            .app_data(web::Data::from(self.cast_members.clone()))
            .app_data(web::Data::from(self.studios.clone()));
    }
}
