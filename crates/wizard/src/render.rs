use std::io::{self, Write};

use hadisco_core::config::Discovery;

/// Prints the three output blocks: the pretty document, then each topic as
/// a JSON-encoded string.
pub fn print_discovery<W: Write>(out: &mut W, discovery: &Discovery) -> io::Result<()> {
    writeln!(out, "\nGenerated JSON Config:")?;
    writeln!(out, "{}", serde_json::to_string_pretty(&discovery.config)?)?;

    writeln!(out, "\nGenerated Configuration Topic:")?;
    writeln!(out, "{}", serde_json::to_string_pretty(&discovery.config_topic)?)?;

    writeln!(out, "\nGenerated Device State Update Topic:")?;
    writeln!(out, "{}", serde_json::to_string_pretty(&discovery.state_topic)?)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use hadisco_core::config::{assemble, DeviceAnswers, DeviceMetadata};
    use hadisco_core::device::DeviceType;

    use super::*;

    #[test]
    fn output_blocks_in_order_with_quoted_topics() {
        let discovery = assemble(&DeviceAnswers {
            name: "Door1".to_string(),
            device_type: DeviceType::Cover,
            class: None,
            unit: None,
            unique_id: "Door1A1B2".to_string(),
            metadata: DeviceMetadata::default(),
        });

        let mut out = Vec::new();
        print_discovery(&mut out, &discovery).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Generated JSON Config:"));
        assert!(text.contains("\"unit_of_meas\": \"None\""));
        assert!(!text.contains("dev_cla"));
        assert!(text.contains(
            "Generated Configuration Topic:\n\"homeassistant/cover/Door1A1B2/config\""
        ));
        assert!(text.contains(
            "Generated Device State Update Topic:\n\"homeassistant/cover/Door1A1B2/state\""
        ));
    }
}
