//! Launcher settings and their defaults.

/// Wildcard bind address for the delegated server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Port the delegated server listens on.
pub const DEFAULT_PORT: u16 = 5000;
/// Remote cloned into the downloader directory when it is absent.
pub const DEFAULT_DOWNLOADER_URL: &str = "https://github.com/zhaarey/apple-music-downloader";
/// Runtime that executes the web application.
pub const DEFAULT_SERVER_PROGRAM: &str = "bun";
/// Server entry point, relative to the web application directory.
pub const DEFAULT_SERVER_ENTRY: &str = "server/index.ts";

/// Runtime knobs for one launcher invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherSettings {
    pub host: String,
    pub port: u16,
    /// Restart the server on source changes (`--watch`).
    pub reload: bool,
    pub downloader_url: String,
    pub server_program: String,
    pub server_entry: String,
}

impl Default for LauncherSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            reload: true,
            downloader_url: DEFAULT_DOWNLOADER_URL.to_string(),
            server_program: DEFAULT_SERVER_PROGRAM.to_string(),
            server_entry: DEFAULT_SERVER_ENTRY.to_string(),
        }
    }
}

impl LauncherSettings {
    /// Arguments passed to the server program.
    pub fn server_args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(2);
        if self.reload {
            args.push("--watch".to_string());
        }
        args.push(self.server_entry.clone());
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = LauncherSettings::default();
        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.port, 5000);
        assert!(settings.reload);
        assert_eq!(settings.server_program, "bun");
    }

    #[test]
    fn test_server_args_with_reload() {
        let settings = LauncherSettings::default();
        assert_eq!(settings.server_args(), vec!["--watch", "server/index.ts"]);
    }

    #[test]
    fn test_server_args_without_reload() {
        let settings = LauncherSettings {
            reload: false,
            ..LauncherSettings::default()
        };
        assert_eq!(settings.server_args(), vec!["server/index.ts"]);
    }
}
