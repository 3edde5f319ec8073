use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG`가 없으면 verbose 여부에 따라 기본 필터를 정한다.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "fuel_calculator=debug,warn"
    } else {
        "fuel_calculator=info,warn"
    }
}

/// 진단 로그를 stderr로 내보내는 구독자를 설치한다. 이미 설치되어 있으면 무시한다.
pub fn init_logging(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    if tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .is_ok()
        && verbose
    {
        tracing::debug!("verbose logging enabled");
    }
}
