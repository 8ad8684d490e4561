use std::env;
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub bind_addr: IpAddr,
    pub static_root: PathBuf,
    pub open_browser: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            bind_addr: env::var("BIND_ADDR")
                .ok()
                .and_then(|a| a.parse().ok())
                .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
            static_root: env::var("STATIC_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("dist")),
            open_browser: env::var("OPEN_BROWSER")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        }
    }

    /// Applies command line overrides on top of the environment layer.
    /// Values that fail to parse leave the current setting untouched.
    pub fn apply_args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();

        if let Some(pos) = args.iter().position(|arg| arg == "--port") {
            if let Some(port) = args.get(pos + 1).and_then(|v| v.parse().ok()) {
                self.port = port;
            }
        }
        if let Some(pos) = args.iter().position(|arg| arg == "--bind") {
            if let Some(addr) = args.get(pos + 1).and_then(|v| v.parse().ok()) {
                self.bind_addr = addr;
            }
        }
        if let Some(pos) = args.iter().position(|arg| arg == "--root") {
            if let Some(root) = args.get(pos + 1) {
                self.static_root = PathBuf::from(root);
            }
        }
        if args.iter().any(|arg| arg == "--no-open") {
            self.open_browser = false;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const ENV_KEYS: [&str; 4] = ["PORT", "BIND_ADDR", "STATIC_ROOT", "OPEN_BROWSER"];

    fn clear_env() {
        for key in ENV_KEYS {
            // SAFETY: env-mutating tests are serialized.
            unsafe { env::remove_var(key) };
        }
    }

    fn base() -> Config {
        Config {
            port: 8080,
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            static_root: PathBuf::from("dist"),
            open_browser: true,
        }
    }

    #[test]
    #[serial]
    fn env_defaults() {
        clear_env();
        let config = Config::from_env();
        assert_eq!(config.port, 8080);
        assert_eq!(config.bind_addr, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(config.static_root, PathBuf::from("dist"));
        assert!(config.open_browser);
    }

    #[test]
    #[serial]
    fn env_overrides() {
        clear_env();
        // SAFETY: env-mutating tests are serialized.
        unsafe {
            env::set_var("PORT", "9090");
            env::set_var("BIND_ADDR", "127.0.0.1");
            env::set_var("STATIC_ROOT", "public");
            env::set_var("OPEN_BROWSER", "false");
        }
        let config = Config::from_env();
        assert_eq!(config.port, 9090);
        assert_eq!(config.bind_addr, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(config.static_root, PathBuf::from("public"));
        assert!(!config.open_browser);
        clear_env();
    }

    #[test]
    #[serial]
    fn unparseable_env_values_fall_back() {
        clear_env();
        // SAFETY: env-mutating tests are serialized.
        unsafe {
            env::set_var("PORT", "not-a-port");
            env::set_var("BIND_ADDR", "somewhere");
        }
        let config = Config::from_env();
        assert_eq!(config.port, 8080);
        assert_eq!(config.bind_addr, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        clear_env();
    }

    #[test]
    fn args_override_env_layer() {
        let config = base().apply_args(
            ["--port", "9000", "--bind", "127.0.0.1", "--root", "public", "--no-open"]
                .map(String::from),
        );
        assert_eq!(config.port, 9000);
        assert_eq!(config.bind_addr, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(config.static_root, PathBuf::from("public"));
        assert!(!config.open_browser);
    }

    #[test]
    fn bad_arg_values_are_ignored() {
        let config = base().apply_args(["--port", "nope", "--bind"].map(String::from));
        assert_eq!(config.port, 8080);
        assert_eq!(config.bind_addr, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    }
}
