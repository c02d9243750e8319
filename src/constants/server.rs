/// Default host the HTTP server binds to.
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default port the HTTP server binds to.
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Time the server waits for in-flight requests on shutdown, in seconds.
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECONDS: u64 = 5;

/// Headers required by Solana Actions clients on every response.
pub const ACTIONS_CORS_ALLOW_ORIGIN: &str = "*";
pub const ACTIONS_CORS_ALLOW_METHODS: &str = "GET,POST,PUT,OPTIONS";
pub const ACTIONS_CORS_ALLOW_HEADERS: &str =
    "Content-Type, Authorization, Content-Encoding, Accept-Encoding";
