pub const DEFAULT_TIMEOUT: u64 = 3;

pub const LOVENSE_SERVER_BASE_URL: &str = "https://api.lovense-api.com/api/lan/";
pub const PC_LOCAL_HOST: &str = "127-0-0-1.lovense.club";
pub const DEFAULT_LOCAL_PORT: u16 = 30010;

pub const COMMAND_API_VERSION: u8 = 1;
pub const QR_API_VERSION: u8 = 2;

pub const CONNECTION_ERROR_MESSAGE: &str = "Error while connecting to Lovense Server";
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error from Lovense";
