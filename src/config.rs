use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub mongodb_uri: String,
    pub database_name: String,
    pub collection_name: String,
    pub media_root: PathBuf,
    pub static_root: PathBuf,
    pub public_base_url: String,
    pub listen_addr: String,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongodb_uri: std::env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database_name: std::env::var("MONGODB_DATABASE")
                .unwrap_or_else(|_| "real_estate".to_string()),
            collection_name: std::env::var("MONGODB_COLLECTION")
                .unwrap_or_else(|_| "properties".to_string()),
            media_root: std::env::var("MEDIA_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./media")),
            static_root: std::env::var("STATIC_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./static")),
            public_base_url: std::env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            max_upload_bytes: std::env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10 * 1024 * 1024),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.mongodb_uri.starts_with("mongodb://")
            && !self.mongodb_uri.starts_with("mongodb+srv://")
        {
            return Err("MONGODB_URI must start with mongodb:// or mongodb+srv://".to_string());
        }

        if self.database_name.is_empty() {
            return Err("MONGODB_DATABASE cannot be empty".to_string());
        }

        if self.collection_name.is_empty() {
            return Err("MONGODB_COLLECTION cannot be empty".to_string());
        }

        if self.listen_addr.is_empty() {
            return Err("LISTEN_ADDR cannot be empty".to_string());
        }

        // Image keys resolve against this at read time, so it has to be a
        // usable absolute URL.
        if !self.public_base_url.starts_with("http://")
            && !self.public_base_url.starts_with("https://")
        {
            return Err("PUBLIC_BASE_URL must start with http:// or https://".to_string());
        }

        if self.max_upload_bytes == 0 || self.max_upload_bytes > 100 * 1024 * 1024 {
            return Err("MAX_UPLOAD_BYTES must be between 1 and 104857600".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            mongodb_uri: "mongodb://localhost:27017".to_string(),
            database_name: "real_estate".to_string(),
            collection_name: "properties".to_string(),
            media_root: PathBuf::from("./media"),
            static_root: PathBuf::from("./static"),
            public_base_url: "http://localhost:8080".to_string(),
            listen_addr: "0.0.0.0:8080".to_string(),
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_invalid_mongodb_uri_rejected() {
        let mut config = valid_config();
        config.mongodb_uri = "postgres://localhost".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_srv_uri_accepted() {
        let mut config = valid_config();
        config.mongodb_uri = "mongodb+srv://cluster.example.net".to_string();

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_public_base_url_rejected() {
        let mut config = valid_config();
        config.public_base_url = "localhost:8080".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_upload_limit_rejected() {
        let mut config = valid_config();
        config.max_upload_bytes = 0;

        assert!(config.validate().is_err());
    }
}
