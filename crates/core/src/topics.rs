// Topic layout helpers matching the Home Assistant MQTT discovery convention

use crate::device::DeviceType;

pub const ROOT: &str = "homeassistant";

/// One-time device description is published here.
pub fn config_topic(device_type: DeviceType, unique_id: &str) -> String {
    format!("{}/{}/{}/config", ROOT, device_type.topic_segment(), unique_id)
}

/// Live state updates are published here.
pub fn state_topic(device_type: DeviceType, unique_id: &str) -> String {
    format!("{}/{}/{}/state", ROOT, device_type.topic_segment(), unique_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sensor_topics() {
        assert_eq!(
            config_topic(DeviceType::Sensor, "ABCD1234"),
            "homeassistant/sensor/ABCD1234/config"
        );
        assert_eq!(
            state_topic(DeviceType::Sensor, "ABCD1234"),
            "homeassistant/sensor/ABCD1234/state"
        );
    }

    #[test]
    fn multi_word_segment_keeps_its_space() {
        assert_eq!(
            config_topic(DeviceType::MediaPlayer, "TV01"),
            "homeassistant/media player/TV01/config"
        );
    }
}
