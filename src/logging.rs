use tracing::Level;
use tracing_subscriber::{prelude::*, EnvFilter};

/// stderr로 출력하는 tracing 구독자를 설치한다.
///
/// 기본 레벨은 WARN이고 `RUST_LOG`로 덮어쓸 수 있다. `verbose`면 이 크레이트의
/// DEBUG 이벤트(IRR 수렴 실패, 배분 탐색 결과 등)까지 출력한다.
pub fn init_logging(verbose: bool) {
    let mut env_filter = EnvFilter::builder()
        .with_default_directive(Level::WARN.into())
        .from_env_lossy();
    if verbose {
        if let Ok(directive) = "steam_price_toolbox=debug".parse() {
            env_filter = env_filter.add_directive(directive);
        }
    }

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false),
    );

    // 테스트 등에서 이미 설치된 경우는 무시한다
    let _ = tracing::subscriber::set_global_default(subscriber);
}
