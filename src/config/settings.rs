use std::time::Duration;

#[derive(Debug, Clone)]
pub struct EditorSettings {
    /// Minimum spacing between two applied drag ticks (~60 Hz)
    pub frame_interval: Duration,
    /// Coordinate tolerance when comparing against the loaded squad
    pub change_tolerance: f64,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(16),
            change_tolerance: 0.1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
    /// Bearer token of the signed-in account; `None` means guest mode
    pub token: Option<String>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/api".to_string(),
            user_agent: "SquadBuilder/1.0",
            timeout_secs: 30,
            token: None,
        }
    }
}

impl ApiSettings {
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        if let Ok(url) = std::env::var("SQUAD_API_URL") {
            settings.base_url = url.trim_end_matches('/').to_string();
        }
        settings.token = std::env::var("SQUAD_API_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty());
        settings
    }
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub database_path: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            database_path: "squad_builder.db".to_string(),
        }
    }
}

impl StorageSettings {
    pub fn from_env() -> Self {
        Self {
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| Self::default().database_path),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub port: u16,
    /// Token clients must present; the service refuses to start without one
    pub token: Option<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 3000,
            token: None,
        }
    }
}

impl ServerSettings {
    pub fn from_env() -> Self {
        Self {
            token: std::env::var("SQUAD_SERVER_TOKEN")
                .ok()
                .filter(|t| !t.trim().is_empty()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub editor: EditorSettings,
    pub api: ApiSettings,
    pub storage: StorageSettings,
    pub server: ServerSettings,
}

impl AppConfig {
    /// Defaults overridden by `SQUAD_API_URL`, `SQUAD_API_TOKEN`,
    /// `DATABASE_PATH` and `SQUAD_SERVER_TOKEN`.
    pub fn new() -> Self {
        Self {
            editor: EditorSettings::default(),
            api: ApiSettings::from_env(),
            storage: StorageSettings::from_env(),
            server: ServerSettings::from_env(),
        }
    }

    /// The auth gate: a token selects the account store.
    pub fn is_guest(&self) -> bool {
        self.api.token.is_none()
    }
}
