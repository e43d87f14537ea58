//! Oculus controller input for device-agnostic input systems.
//!
//! The host owns a [`HardwareSession`] and a [`DeviceManager`] and calls
//! [`DeviceManager::update`] once per frame. Every detected transition is handed to an
//! [`InputSink`] as an [`InputEvent`].

pub mod config;
pub mod error;
pub mod hardware;
pub mod input;

pub use config::{ProviderConfig, TouchProfile};
pub use error::{ConfigError, SetupError};
pub use hardware::HardwareSession;
pub use input::{
    InputEvent, InputSink,
    devices::{DeviceManager, SessionId},
};

use std::io::Write;
use std::sync::Once;

#[macro_export]
macro_rules! tracy_span {
    () => {
        $crate::tracy_span!("<unnamed>")
    };
    ($name:literal) => {
        #[cfg(feature = "tracing")]
        let _span = tracy_client::span!($name);
    };
}

/// Installs the process-wide logger. Safe to call more than once.
///
/// The filter comes from `RUST_LOG` and defaults to `info`.
pub fn init_logging() {
    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        #[cfg(feature = "tracing")]
        tracy_client::Client::start();

        let format = time::macros::format_description!(
            "[hour]:[minute]:[second].[subsecond digits:3]"
        );
        let mut builder =
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
        builder.format(move |buf, record| {
            let now = time::OffsetDateTime::now_local()
                .unwrap_or_else(|_| time::OffsetDateTime::now_utc());
            writeln!(
                buf,
                "[{} {} {}] {}",
                now.format(&format).unwrap_or_default(),
                record.level(),
                record.target(),
                record.args()
            )
        });
        builder.is_test(cfg!(test));

        if builder.try_init().is_err() {
            log::debug!("logger already installed");
        }
    });
}
