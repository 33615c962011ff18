pub mod env_var {
    use std::time::Duration;

    use lazy_static::lazy_static;
    use url::Url;

    const DEFAULT_MODEL: &str = "fastino/gliner2-base-v1";
    const DEFAULT_EXTRACTOR_API_URL: &str = "https://api.fastino.ai/v1/extract";

    lazy_static! {
        static ref ENV_VAR: EnvVar = load_env();
    }

    #[derive(Debug, Clone)]
    pub struct EnvVar {
        pub host: String,
        pub port: u16,
        pub model: String,
        pub pioneer_api_key: Option<String>,
        pub extractor_api_url: Url,
        pub extractor_timeout: Duration,
    }

    macro_rules! get_env_or {
        ($env:literal, $default:expr) => {
            std::env::var($env).unwrap_or_else(|_| $default.into())
        };
    }

    fn load_env() -> EnvVar {
        let host = get_env_or!("HOST", "0.0.0.0");
        let port: u16 = get_env_or!("PORT", "5000").parse().expect("Invalid PORT");
        let model = get_env_or!("GLINER2_MODEL", DEFAULT_MODEL);

        // An empty key means no key, matching how the api mode is switched on.
        let pioneer_api_key = std::env::var("PIONEER_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());

        let extractor_api_url: Url = get_env_or!("EXTRACTOR_API_URL", DEFAULT_EXTRACTOR_API_URL)
            .parse()
            .expect("Invalid EXTRACTOR_API_URL");
        let timeout_ms: u64 = get_env_or!("EXTRACTOR_TIMEOUT_MS", "10000")
            .parse()
            .expect("Invalid EXTRACTOR_TIMEOUT_MS");

        EnvVar {
            host,
            port,
            model,
            pioneer_api_key,
            extractor_api_url,
            extractor_timeout: Duration::from_millis(timeout_ms),
        }
    }

    pub fn get() -> &'static EnvVar {
        &ENV_VAR
    }
}
