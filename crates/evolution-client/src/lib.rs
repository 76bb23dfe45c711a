//! Evolution Client - typed access to the Evolution messaging gateway
//!
//! This crate wraps the Evolution WhatsApp gateway HTTP API in a small set
//! of service façades:
//! - Instances (create, connect, presence, state, logout, delete)
//! - Groups (create, participants, invites, settings, picture)
//! - Messages (text, media, audio, sticker, location, contact, poll)
//! - Profile and instance settings
//!
//! All services delegate to a single transport client ([`EvolutionApi`])
//! that performs one HTTP request per call and never surfaces transport
//! failures as errors from `get`/`post`/`delete`; they come back as a
//! `{"error": ...}` object instead. See [`transport`] for the exact
//! contract, and the `try_*` methods there for a `Result`-based surface.
//!
//! ```no_run
//! use evolution_client::{EvolutionClient, EvolutionConfig, SendOptions};
//!
//! # async fn run() -> evolution_client::Result<()> {
//! let config = EvolutionConfig::new("https://evo.example.com", "secret-key");
//! let client = EvolutionClient::new(&config)?;
//!
//! let response = client
//!     .messages()
//!     .send_text("my-instance", "5511999999999", "hello", SendOptions::new())
//!     .await;
//! println!("{response}");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod group;
pub mod instance;
pub mod message;
pub mod profile;
pub mod settings;
pub mod transport;

pub use error::{Error, Result};

// Re-export the client entry points
pub use client::EvolutionClient;
pub use config::EvolutionConfig;
pub use transport::EvolutionApi;

// Re-export the resource services
pub use group::GroupService;
pub use instance::InstanceService;
pub use message::{MessageService, SendOptions};
pub use profile::ProfileService;
pub use settings::SettingsService;
