use serde::{Serialize, Serializer};

use thiserror::Error;

use crate::models::RejectedParam;

#[derive(Debug, Error)]
pub enum Error {
    #[error("key '{0}' does not exist")]
    MissingKey(&'static str),

    #[error("{}", fmt_rejected(.0))]
    UnsupportedParameters(Vec<RejectedParam>),

    /// The vendor SDK raised an error; `message` is its own text.
    #[error("{message}")]
    Vendor {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Handler not initialized")]
    HandlerNotInitialized,

    #[error("Handler already initialized")]
    AlreadyInitialized,

    #[error(transparent)]
    Tauri(#[from] tauri::Error),

    #[cfg(target_os = "android")]
    #[error(transparent)]
    PluginInvoke(#[from] tauri::plugin::mobile::PluginInvokeError),
}

impl Error {
    #[cfg_attr(not(target_os = "android"), allow(dead_code))]
    pub(crate) fn vendor<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Vendor {
            message: err.to_string(),
            source: Box::new(err),
        }
    }
}

fn fmt_rejected(rejected: &[RejectedParam]) -> String {
    rejected
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

pub type Result<T> = std::result::Result<T, Error>;

impl Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}
