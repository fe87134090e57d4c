//! Client SDK for the [Lettermint](https://lettermint.co) transactional
//! email API: a fluent email builder, a recipient whitelist for
//! non-production environments, and a typed dispatch client with
//! idempotency support.
//!
//! ```no_run
//! use lettermint::{LettermintClient, LettermintSettings};
//!
//! # async fn demo() -> Result<(), lettermint::LettermintError> {
//! let settings = LettermintSettings::new("lm_live_token")
//!     .with_email_whitelist(["*@mycompany.dev"]);
//! let client = LettermintClient::new(settings)?;
//!
//! let response = client
//!     .email()
//!     .from("Acme <noreply@acme.dev>")
//!     .to("jane@mycompany.dev")
//!     .subject("Welcome aboard")
//!     .html("<h1>Hello!</h1>")
//!     .send()
//!     .await?;
//! println!("queued as {}", response.message_id);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod client;
pub mod configuration;
pub mod email;
pub mod error;
pub mod telemetry;
pub mod whitelist;

pub use builder::EmailBuilder;
pub use client::LettermintClient;
pub use configuration::LettermintSettings;
pub use email::{Attachment, EmailRequest, EmailResponse, Route};
pub use error::LettermintError;
pub use whitelist::EmailWhitelist;
