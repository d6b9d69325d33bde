//! Auth Config

use clap::Args;
use store_app::auth::ApiTokenGrant;

/// API token settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Accepted bearer tokens, comma separated, each as `token=ROLE|ROLE`
    #[arg(
        long,
        env = "API_TOKENS",
        value_delimiter = ',',
        hide_env_values = true
    )]
    pub api_tokens: Vec<ApiTokenGrant>,
}
