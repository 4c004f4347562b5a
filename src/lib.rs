//! Control Lovense toys through the Lovense local and server APIs
//!
//! # Example
//!
//! ```
//! use lovense::{Action, ActionKind, Connection, ExecuteOptions, Lovense, Platform};
//!
//! # async fn example() -> Result<(), lovense::Error> {
//! let lovense = Lovense::new(Connection::Local)?;
//! lovense.set_platform(Platform::Pc);
//!
//! for toy in lovense.fetch_toys().await? {
//!     println!("{} ({})", toy.name(), toy.id());
//! }
//!
//! lovense
//!     .execute_actions(ExecuteOptions::all(), Action::new(ActionKind::Vibrate, 8))
//!     .await?;
//! lovense.stop_actions(None).await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod constant;
mod error;

pub use client::{
    build_action, model_action, Action, ActionKind, AppType, CallbackData, Command, Config,
    Connection, Credentials, ExecuteOptions, Lovense, Platform, QrCode, QrData, Response, Toy,
};
pub use constant::{DEFAULT_LOCAL_PORT, LOVENSE_SERVER_BASE_URL};
pub use error::{ApiError, ClientError, Error, Result, Status};
