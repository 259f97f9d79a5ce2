use std::path::PathBuf;

/// Reporter configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ReporterConfig {
    /// Identifier of the node being summarised.
    pub node_id: String,
    /// Host address of the node (default: `127.0.0.1`).
    pub host_address: String,
    /// JSON file holding the node's dimension profiles.
    pub profile_input: PathBuf,
    /// When set, the summary row and its nested rows are persisted.
    pub database_url: Option<String>,
}

impl ReporterConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var         | Default          |
    /// |-----------------|------------------|
    /// | `NODE_ID`       | (required)       |
    /// | `HOST_ADDRESS`  | `127.0.0.1`      |
    /// | `PROFILE_INPUT` | `profiles.json`  |
    /// | `DATABASE_URL`  | unset            |
    pub fn from_env() -> anyhow::Result<Self> {
        let node_id = std::env::var("NODE_ID")
            .map_err(|_| anyhow::anyhow!("NODE_ID must be set"))?;
        let host_address =
            std::env::var("HOST_ADDRESS").unwrap_or_else(|_| "127.0.0.1".into());
        let profile_input = std::env::var("PROFILE_INPUT")
            .unwrap_or_else(|_| "profiles.json".into())
            .into();
        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty());

        Ok(Self {
            node_id,
            host_address,
            profile_input,
            database_url,
        })
    }
}
