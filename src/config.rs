// The model identifier and bind address are part of the service contract;
// there is no runtime configuration surface.

pub const MODEL_NAME: &str = "all-MiniLM-L6-v2";

pub const BIND_HOST: &str = "0.0.0.0";
pub const BIND_PORT: u16 = 5555;
