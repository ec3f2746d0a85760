//! Host-messaging backend for running embedded in a controlling application.
//!
//! The host owns persistence and pushes the full settings state on its own
//! schedule, so this backend never answers reads. Writes become one-way
//! `changeSetting` messages that are neither awaited nor confirmed.

use std::{fmt::Debug, sync::Arc};

use {
    async_channel::Sender,
    serde::{Deserialize, Serialize},
    serde_json::{Error as SerdeJsonError, to_string},
    tracing::{debug, warn},
};

use crate::{settings::SettingValue, storage::backend::StorageBackend};

/// Command name of a setting change message.
pub const CHANGE_SETTING_COMMAND: &str = "changeSetting";

/// Message posted to the host.
///
/// Serializes as
/// `{"command":"changeSetting","data":{"option":"theme","newValue":"dark"}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostMessage {
    /// Command discriminator, always [`CHANGE_SETTING_COMMAND`].
    pub command: String,
    /// Change payload.
    pub data: ChangeSetting,
}

/// Payload of a `changeSetting` message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeSetting {
    /// Setting key.
    pub option: String,
    /// New typed value.
    pub new_value: SettingValue,
}

impl HostMessage {
    /// Builds a `changeSetting` message.
    #[must_use]
    pub fn change_setting(option: &str, new_value: SettingValue) -> Self {
        Self {
            command: CHANGE_SETTING_COMMAND.to_string(),
            data: ChangeSetting {
                option: option.to_string(),
                new_value,
            },
        }
    }

    /// Serializes the message to its JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json` error if serialization fails.
    pub fn to_json(&self) -> Result<String, SerdeJsonError> {
        to_string(self)
    }
}

/// One-way message capability exposed by the host.
pub trait HostChannel: Debug + Send + Sync {
    /// Posts a message. Must not block; no response is read.
    fn post(&self, message: HostMessage);
}

impl HostChannel for Sender<HostMessage> {
    fn post(&self, message: HostMessage) {
        if let Err(e) = self.try_send(message) {
            warn!("Host channel dropped setting change: {}", e);
        }
    }
}

/// Backend that forwards every write to the host.
#[derive(Debug, Clone)]
pub struct HostBackend {
    channel: Arc<dyn HostChannel>,
}

impl HostBackend {
    /// Binds the backend to a host channel.
    #[must_use]
    pub fn new(channel: Arc<dyn HostChannel>) -> Self {
        Self { channel }
    }
}

impl StorageBackend for HostBackend {
    fn read(&self, _key: &str) -> Option<String> {
        None
    }

    fn write(&self, key: &str, value: &SettingValue) {
        debug!("Posting {} = {} to host", key, value);
        self.channel
            .post(HostMessage::change_setting(key, value.clone()));
    }
}
