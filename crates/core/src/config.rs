use serde::Serialize;

use crate::device::DeviceType;
use crate::topics;

pub const DEFAULT_VALUE_TEMPLATE: &str = "{{ value_json.value }}";

/// Answers collected over one wizard run. Filled step by step, consumed
/// once by [`assemble`].
#[derive(Debug, Clone)]
pub struct DeviceAnswers {
    pub name: String,
    pub device_type: DeviceType,
    pub class: Option<String>,
    pub unit: Option<String>,
    pub unique_id: String,
    pub metadata: DeviceMetadata,
}

/// Optional device metadata, one slot per prompt. Empty answers stay
/// `None` and never reach the serialized document.
#[derive(Debug, Clone, Default)]
pub struct DeviceMetadata {
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub model_id: Option<String>,
    pub serial_number: Option<String>,
    pub hardware_version: Option<String>,
    pub software_version: Option<String>,
    pub configuration_url: Option<String>,
}

/// The discovery document. Field names are fixed by the protocol and
/// serialized in this order.
#[derive(Debug, Clone, Serialize)]
pub struct DeviceConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_cla: Option<String>,
    pub unit_of_meas: String,
    pub val_tpl: String,
    pub stat_t: String,
    pub unique_id: String,
    pub dev: DeviceBlock,
}

/// Nested device record under `dev`. Absent metadata fields are omitted
/// entirely rather than serialized as null.
#[derive(Debug, Clone, Serialize)]
pub struct DeviceBlock {
    pub name: String,
    pub ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")] pub mf: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")] pub mdl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")] pub mdl_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")] pub sn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")] pub hw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")] pub sw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")] pub cu: Option<String>,
}

impl DeviceBlock {
    pub fn builder(name: impl Into<String>) -> DeviceBlockBuilder {
        DeviceBlockBuilder {
            name: name.into(),
            metadata: DeviceMetadata::default(),
        }
    }
}

/// Builds the `dev` record, mapping the long-form metadata slots onto the
/// short protocol keys.
#[derive(Debug)]
pub struct DeviceBlockBuilder {
    name: String,
    metadata: DeviceMetadata,
}

impl DeviceBlockBuilder {
    pub fn metadata(mut self, metadata: DeviceMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn build(self) -> DeviceBlock {
        let DeviceMetadata {
            manufacturer,
            model,
            model_id,
            serial_number,
            hardware_version,
            software_version,
            configuration_url,
        } = self.metadata;
        DeviceBlock {
            ids: vec![self.name.clone()],
            name: self.name,
            mf: manufacturer,
            mdl: model,
            mdl_id: model_id,
            sn: serial_number,
            hw: hardware_version,
            sw: software_version,
            cu: configuration_url,
        }
    }
}

/// The assembled output of one run: the document plus its two topics.
#[derive(Debug, Clone)]
pub struct Discovery {
    pub config: DeviceConfig,
    pub config_topic: String,
    pub state_topic: String,
}

/// Template the hub applies to incoming payloads. Generic for everything
/// except the three sensor classes with dedicated payload fields.
pub fn value_template(device_type: DeviceType, class: Option<&str>) -> &'static str {
    if device_type != DeviceType::Sensor {
        return DEFAULT_VALUE_TEMPLATE;
    }
    match class {
        Some("temperature") => "{{ value_json.temperature }}",
        Some("humidity") => "{{ value_json.humidity }}",
        Some("pressure") => "{{ value_json.pressure }}",
        _ => DEFAULT_VALUE_TEMPLATE,
    }
}

/// Pure function from collected answers to the discovery output. Printing
/// is the caller's job.
pub fn assemble(answers: &DeviceAnswers) -> Discovery {
    let state_topic = topics::state_topic(answers.device_type, &answers.unique_id);
    let config_topic = topics::config_topic(answers.device_type, &answers.unique_id);

    let dev = DeviceBlock::builder(answers.name.clone())
        .metadata(answers.metadata.clone())
        .build();

    let config = DeviceConfig {
        dev_cla: answers.class.clone(),
        unit_of_meas: answers
            .unit
            .clone()
            .unwrap_or_else(|| "None".to_string()),
        val_tpl: value_template(answers.device_type, answers.class.as_deref()).to_string(),
        stat_t: state_topic.clone(),
        unique_id: answers.unique_id.clone(),
        dev,
    };

    Discovery {
        config,
        config_topic,
        state_topic,
    }
}
