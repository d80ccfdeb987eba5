pub const AGENT_RUNTIME_URL: &str = "AGENT_RUNTIME_URL";
pub const AGENT_RUNTIME_API_KEY: &str = "AGENT_RUNTIME_API_KEY";

pub const BASE_URL: &str = "ws://localhost:7880";
pub const DEFAULT_AGENT_NAME: &str = "cafe-feedback";
pub const DEFAULT_CAPACITY: usize = 128;

pub const AUTHORIZATION_HEADER: &str = "Authorization";
