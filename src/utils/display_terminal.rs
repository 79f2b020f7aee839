//! 시작 화면 출력
//!
//! 서버 기동 중 저장소 연결 상태와 노출되는 API 리소스를 터미널에 보여줍니다.
//! 로그와 별개로 `println!`을 사용하므로 `RUST_LOG` 설정과 무관하게 출력됩니다.

/// 배너 최소 폭
const MIN_BANNER_WIDTH: usize = 50;

/// 제목 길이에 맞춰 늘어나는 배너를 출력합니다
///
/// ```text
/// ┏━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┓
/// ┃              MOVIE CATALOG BACKEND               ┃
/// ┗━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┛
/// ```
pub fn print_banner(title: &str) {
    let width = MIN_BANNER_WIDTH.max(title.chars().count() + 4);
    let rule = "━".repeat(width);

    println!("┏{}┓", rule);
    println!("┃{:^width$}┃", title, width = width);
    println!("┗{}┛", rule);
}

/// 저장소 연결 결과
///
/// ```text
/// [storage] mongo → movie_catalog_dev
/// ```
pub fn print_storage(backend: &str, target: &str) {
    println!("[storage] {} → {}", backend, target);
}

/// 등록된 API 리소스 목록
///
/// ```text
/// [routes]  5 resources
///           /api/v1/movie
///           /api/v1/director
/// ```
pub fn print_resources(resources: &[String]) {
    println!("[routes]  {} resources", resources.len());
    for resource in resources {
        println!("          {}", resource);
    }
}

pub fn print_startup_summary(storage: &str, bind_address: &str) {
    println!();
    print_banner("🎬 MOVIE CATALOG READY");
    println!("   storage  : {}", storage);
    println!("   listening: http://{}", bind_address);
    println!("   health   : http://{}/health", bind_address);
    println!();
}
