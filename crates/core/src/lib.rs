pub mod catalog;
pub mod config;
pub mod device;
pub mod error;
pub mod idgen;
pub mod topics;

pub use config::{assemble, DeviceAnswers, DeviceBlock, DeviceConfig, DeviceMetadata, Discovery};
pub use device::DeviceType;
pub use error::WizardError;
