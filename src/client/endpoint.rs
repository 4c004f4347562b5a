use super::{Connection, Platform};
use crate::constant::PC_LOCAL_HOST;

/// Where the local Lovense app listens
#[derive(Debug, Clone, Copy)]
pub(crate) struct LocalAddress<'a> {
    pub platform: Platform,
    pub domain: &'a str,
    pub port: u16,
}

/// Url commands are posted to
pub(crate) fn command_url(connection: &Connection, local: LocalAddress, server_base: &str) -> String {
    match connection {
        Connection::Local => {
            let host = match local.platform {
                Platform::Pc => PC_LOCAL_HOST,
                _ => local.domain,
            };
            format!("https://{}:{}/command", host, local.port)
        }
        Connection::Server(_) => format!("{}v2/command", server_base),
    }
}

pub(crate) fn qr_code_url(server_base: &str) -> String {
    format!("{}getQrCode", server_base)
}
