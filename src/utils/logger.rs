use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_filter(verbose: bool, default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("love_connect=debug,info")
        } else {
            EnvFilter::new(format!("love_connect={}", default_level))
        }
    })
}

pub fn init_cli_logger(verbose: bool, default_level: &str) {
    tracing_subscriber::registry()
        .with(env_filter(verbose, default_level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(verbose: bool, default_level: &str) {
    tracing_subscriber::registry()
        .with(env_filter(verbose, default_level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .json(), // 機器可讀的日誌輸出
        )
        .init();
}
