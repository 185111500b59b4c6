/// Device types supported by the discovery protocol, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceType {
    BinarySensor,
    Button,
    Cover,
    Event,
    Humidifier,
    MediaPlayer,
    Number,
    Sensor,
    Switch,
    Update,
    Valve,
}

impl DeviceType {
    pub const ALL: [DeviceType; 11] = [
        DeviceType::BinarySensor,
        DeviceType::Button,
        DeviceType::Cover,
        DeviceType::Event,
        DeviceType::Humidifier,
        DeviceType::MediaPlayer,
        DeviceType::Number,
        DeviceType::Sensor,
        DeviceType::Switch,
        DeviceType::Update,
        DeviceType::Valve,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DeviceType::BinarySensor => "Binary Sensor",
            DeviceType::Button => "Button",
            DeviceType::Cover => "Cover",
            DeviceType::Event => "Event",
            DeviceType::Humidifier => "Humidifier",
            DeviceType::MediaPlayer => "Media player",
            DeviceType::Number => "Number",
            DeviceType::Sensor => "Sensor",
            DeviceType::Switch => "Switch",
            DeviceType::Update => "Update",
            DeviceType::Valve => "Valve",
        }
    }

    /// Topic path segment: the lower-cased label. Interior spaces are kept
    /// ("Media player" becomes "media player"), matching what consumers of
    /// the discovery topics expect.
    pub fn topic_segment(&self) -> String {
        self.label().to_lowercase()
    }

    /// Resolve a 1-based menu selection.
    pub fn from_menu_index(index: usize) -> Option<DeviceType> {
        if index == 0 {
            return None;
        }
        Self::ALL.get(index - 1).copied()
    }
}

impl std::fmt::Display for DeviceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_indices_resolve_labels() {
        let expected = [
            "Binary Sensor",
            "Button",
            "Cover",
            "Event",
            "Humidifier",
            "Media player",
            "Number",
            "Sensor",
            "Switch",
            "Update",
            "Valve",
        ];
        for (i, label) in expected.iter().enumerate() {
            let ty = DeviceType::from_menu_index(i + 1).unwrap();
            assert_eq!(ty.label(), *label);
        }
    }

    #[test]
    fn out_of_range_indices_are_rejected() {
        assert_eq!(DeviceType::from_menu_index(0), None);
        assert_eq!(DeviceType::from_menu_index(12), None);
        assert_eq!(DeviceType::from_menu_index(usize::MAX), None);
    }

    #[test]
    fn topic_segment_keeps_spaces() {
        assert_eq!(DeviceType::MediaPlayer.topic_segment(), "media player");
        assert_eq!(DeviceType::BinarySensor.topic_segment(), "binary sensor");
        assert_eq!(DeviceType::Cover.topic_segment(), "cover");
    }
}
