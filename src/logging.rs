use tracing_subscriber::EnvFilter;

use crate::config::AppEnv;

/// Installs the global subscriber. `RUST_LOG` overrides the per-environment
/// default filter.
pub fn init(env: AppEnv) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(env)));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match env {
        AppEnv::Local => builder.init(),
        AppEnv::Dev | AppEnv::Prod => builder.json().init(),
    }
}

fn default_filter(env: AppEnv) -> &'static str {
    match env {
        AppEnv::Local | AppEnv::Dev => "debug,sqlx=info",
        AppEnv::Prod => "info",
    }
}
