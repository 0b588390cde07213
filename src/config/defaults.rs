//! Built-in default values for configuration options.

/// Default primary `.env` file path.
pub const ENV_FILE: &str = "/configs/.env";

/// Default fallback template path.
pub const TEMPLATE_FILE: &str = "/configs/.env.template";

/// Default directory for uploaded SSL material.
pub const SSL_DIR: &str = "/ssl";

/// Default directory of static UI assets.
pub const UI_DIR: &str = "/ui";

/// Default TCP listen address.
pub const LISTEN: &str = "127.0.0.1:8686";

/// Default name of the TLS setting written after a cert+key upload.
pub const TLS_KEY: &str = "ROCKET_TLS";
