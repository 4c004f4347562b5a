use super::constant::{COMMAND_API_VERSION, DEFAULT_LOCAL_PORT};
use super::error::Result;

mod command;
mod config;
mod endpoint;
mod pair;
mod response;
mod toy;

pub use self::command::{build_action, Action, ActionKind, Command, ExecuteOptions};
pub use self::config::{AppType, Config, Connection, Credentials, Platform};
pub use self::pair::{CallbackData, QrCode, QrData};
pub use self::response::Response;
pub use self::toy::{model_action, Toy};

use self::endpoint::{command_url, LocalAddress};
use self::toy::ToyCache;
use reqwest::Client;
use serde_json::Value;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// A Lovense client
///
/// Sends commands to toys either directly through the Lovense app on the local
/// network ([`Connection::Local`]) or through the Lovense server
/// ([`Connection::Server`]). The connection is fixed at construction.
///
/// Note that cloning `Lovense` is zero-cost but not thread safe. Clones share
/// the local address and the toy cache.
#[derive(Debug, Clone)]
pub struct Lovense {
    inner: Rc<LovenseRef>,
}

impl Lovense {
    /// Create a client with the default [`Config`]
    ///
    /// # Example
    ///
    /// ```
    /// # use lovense::{Connection, Credentials, Lovense};
    /// #
    /// # fn connect() -> Result<(), lovense::Error> {
    /// let local = Lovense::new(Connection::Local)?;
    ///
    /// let server = Lovense::new(Connection::Server(
    ///     Credentials::new("developer-token", "user-id").uname("user-name"),
    /// ))?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(connection: Connection) -> Result<Self> {
        Self::with_config(connection, Config::default())
    }

    pub fn with_config(connection: Connection, config: Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.danger_accept_invalid_certs)
            .build()?;

        Ok(Self {
            inner: Rc::new(LovenseRef {
                connection,
                config,
                local_port: Cell::new(DEFAULT_LOCAL_PORT),
                local_domain: RefCell::new(String::new()),
                platform: Cell::new(Platform::default()),
                toys: ToyCache::default(),
                client,
            }),
        })
    }

    pub fn connection(&self) -> &Connection {
        &self.inner.connection
    }

    /// Https port of the local Lovense app
    pub fn local_connect_port(&self) -> u16 {
        self.inner.local_port.get()
    }

    pub fn set_local_connect_port(&self, port: u16) {
        self.inner.local_port.set(port);
    }

    /// Domain of the local Lovense app. Not used on [`Platform::Pc`].
    pub fn local_domain(&self) -> String {
        self.inner.local_domain.borrow().clone()
    }

    pub fn set_local_domain<S: Into<String>>(&self, domain: S) {
        self.inner.local_domain.replace(domain.into());
    }

    /// Platform the local Lovense app runs on
    pub fn platform(&self) -> Platform {
        self.inner.platform.get()
    }

    pub fn set_platform(&self, platform: Platform) {
        self.inner.platform.set(platform);
    }

    /// Url commands are currently sent to
    pub fn command_url(&self) -> String {
        let domain = self.inner.local_domain.borrow();
        command_url(
            &self.inner.connection,
            LocalAddress {
                platform: self.platform(),
                domain: &domain,
                port: self.local_connect_port(),
            },
            &self.inner.config.server_base_url,
        )
    }

    /// Get the toys connected to the Lovense app.
    ///
    /// Only a [`Connection::Local`] client asks the app. A server client has no
    /// way to list toys and returns the cached toys, which are filled from the
    /// pairing callback.
    pub async fn fetch_toys(&self) -> Result<Vec<Toy>> {
        if !self.inner.connection.is_local() {
            return Ok(self.toys());
        }

        let toys = self
            .execute_command(&Command::get_toys())
            .await?
            .into_toys()?;
        log::debug!(target: "lovense::client", "Fetched {} toys", toys.len());

        self.inner.toys.replace(toys.clone());
        Ok(toys)
    }

    /// Replace the cached toys, e.g. with toys from a pairing callback
    pub fn set_toys(&self, toys: Vec<Toy>) {
        self.inner.toys.replace(toys);
    }

    /// Cached toys. These may be out of date.
    pub fn toys(&self) -> Vec<Toy> {
        self.inner.toys.snapshot()
    }

    /// Cached toys that were online
    pub fn online_toys(&self) -> Vec<Toy> {
        self.inner.toys.online()
    }

    /// Run one or more functions on a toy, or on every toy
    ///
    /// # Example
    ///
    /// ```
    /// use lovense::{Action, ActionKind, Connection, ExecuteOptions, Lovense};
    ///
    /// # async fn vibrate() -> Result<(), lovense::Error> {
    /// let lovense = Lovense::new(Connection::Local)?;
    /// lovense.set_local_domain("192-168-1-44.lovense.club");
    ///
    /// // Vibrate every toy for 5 seconds
    /// lovense
    ///     .execute_actions(
    ///         ExecuteOptions::all().duration(5.0),
    ///         Action::new(ActionKind::Vibrate, 12),
    ///     )
    ///     .await?;
    ///
    /// // Vibrate and pump one toy until stopped
    /// lovense
    ///     .execute_actions(
    ///         ExecuteOptions::toy("ff922f7fd345"),
    ///         vec![
    ///             Action::new(ActionKind::Vibrate, 10),
    ///             Action::new(ActionKind::Pump, 2),
    ///         ],
    ///     )
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn execute_actions<V: Into<Vec<Action>>>(
        &self,
        options: ExecuteOptions,
        actions: V,
    ) -> Result<Response> {
        let actions: Vec<Action> = actions.into();
        self.execute_command(&Command::actions(&options, &actions))
            .await
    }

    /// Stop a toy, or every toy when `toy` is `None`
    pub async fn stop_actions(&self, toy: Option<&str>) -> Result<Response> {
        self.execute_command(&Command::stop(toy)).await
    }

    /// Play a strength pattern, one step every `interval_ms` milliseconds
    pub async fn execute_pattern(
        &self,
        options: ExecuteOptions,
        features: &[ActionKind],
        interval_ms: u32,
        strengths: &[i32],
    ) -> Result<Response> {
        self.execute_command(&Command::pattern(&options, features, interval_ms, strengths))
            .await
    }

    /// Play one of the app's presets, e.g. "pulse", "wave", "fireworks" or "earthquake"
    pub async fn execute_preset<S: Into<String>>(
        &self,
        options: ExecuteOptions,
        name: S,
    ) -> Result<Response> {
        self.execute_command(&Command::preset(&options, name)).await
    }

    pub(crate) async fn execute_command(&self, command: &Command) -> Result<Response> {
        let body = self.command_body(command)?;
        let url = self.command_url();
        log::debug!(target: "lovense::client", "Sending {} to {}", command.command(), url);

        let res = self.inner.client.post(&url).json(&body).send().await?;
        let body: Value = res.json().await?;

        response::process(body)
    }

    // Server commands carry the developer credentials
    fn command_body(&self, command: &Command) -> Result<Value> {
        let mut body = serde_json::to_value(command)?;
        if let (Connection::Server(credentials), Value::Object(map)) =
            (&self.inner.connection, &mut body)
        {
            map.insert("token".into(), credentials.token.clone().into());
            map.insert("uid".into(), credentials.uid.clone().into());
            map.entry("apiVer").or_insert_with(|| COMMAND_API_VERSION.into());
        }
        Ok(body)
    }
}

#[derive(Debug)]
struct LovenseRef {
    connection: Connection,
    config: Config,
    local_port: Cell<u16>,
    local_domain: RefCell<String>,
    platform: Cell<Platform>,
    toys: ToyCache,
    client: Client,
}
