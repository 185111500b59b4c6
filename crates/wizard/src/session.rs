use std::io::{self, BufRead, Write};

use tracing::debug;

use hadisco_core::catalog::{self, ClassEntry};
use hadisco_core::config::{assemble, DeviceAnswers, DeviceMetadata, Discovery};
use hadisco_core::device::DeviceType;
use hadisco_core::error::WizardError;
use hadisco_core::idgen;

/// One interactive run over a pair of console handles. Owns the
/// accumulating answers; each prompt blocks on a single line of input.
pub struct Wizard<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Wizard<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Runs the full prompt sequence and assembles the discovery output.
    /// Any invalid selection is terminal; there is no re-prompting.
    pub fn run(mut self) -> Result<Discovery, WizardError> {
        writeln!(
            self.output,
            "Welcome to the Home Assistant JSON Config Generator!"
        )?;

        let name = self.prompt("Enter the device name: ")?;

        writeln!(
            self.output,
            "\nPick a device type from the list (number corresponds to device type):"
        )?;
        for (i, ty) in DeviceType::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, ty)?;
        }
        let answer = self.prompt("\nEnter the number corresponding to the device type: ")?;
        let device_type = answer
            .parse()
            .ok()
            .and_then(DeviceType::from_menu_index)
            .ok_or(WizardError::InvalidDeviceType)?;
        debug!(%device_type, "device type resolved");

        let mut class = None;
        let mut unit = None;
        match device_type {
            DeviceType::Sensor => {
                let (class_name, units) = self.pick_class(
                    "\nChoose a device class from the following options:",
                    catalog::SENSOR_CLASSES,
                    "\nEnter the number corresponding to the sensor class: ",
                    WizardError::InvalidSensorClass,
                )?;

                writeln!(
                    self.output,
                    "\nChoose a unit of measurement for {}:",
                    class_name
                )?;
                for (i, u) in units.iter().enumerate() {
                    writeln!(self.output, "{}. {}", i + 1, u)?;
                }
                let answer =
                    self.prompt("\nEnter the number corresponding to the unit of measurement: ")?;
                let chosen = answer
                    .parse()
                    .ok()
                    .and_then(|i| catalog::unit_by_index(units, i))
                    .ok_or(WizardError::InvalidUnit)?;
                debug!(class_name, unit = chosen, "sensor class resolved");

                class = Some(class_name.to_string());
                unit = Some(chosen.to_string());
            }
            DeviceType::BinarySensor => {
                let (class_name, states) = self.pick_class(
                    "\nChoose a binary sensor class from the following options:",
                    catalog::BINARY_SENSOR_CLASSES,
                    "\nEnter the number corresponding to the binary sensor class: ",
                    WizardError::InvalidBinarySensorClass,
                )?;

                // The state choice is confirmed but does not land in the
                // document; binary sensors report no unit of measurement.
                writeln!(self.output, "\nChoose a state for {}:", class_name)?;
                for (i, s) in states.iter().enumerate() {
                    writeln!(self.output, "{}. {}", i + 1, s)?;
                }
                let answer =
                    self.prompt("\nEnter the number corresponding to the state (on/off): ")?;
                let state = answer
                    .parse()
                    .ok()
                    .and_then(|i| catalog::unit_by_index(states, i))
                    .ok_or(WizardError::InvalidState)?;
                debug!(class_name, state, "binary sensor class resolved");

                class = Some(class_name.to_string());
            }
            DeviceType::Button => {
                let (class_name, _) = self.pick_class(
                    "\nChoose a button class from the following options:",
                    catalog::BUTTON_CLASSES,
                    "\nEnter the number corresponding to the button class: ",
                    WizardError::InvalidButtonClass,
                )?;
                debug!(class_name, "button class resolved");

                class = Some(class_name.to_string());
            }
            _ => {}
        }

        let manual = self.prompt("Do you want to enter a unique ID manually? (yes/no): ")?;
        let unique_id = if manual.eq_ignore_ascii_case("yes") {
            self.prompt("Enter the unique ID: ")?
        } else {
            idgen::unique_id(&name)
        };
        debug!(%unique_id, "unique id resolved");

        let metadata = DeviceMetadata {
            manufacturer: self.optional("Enter the manufacturer (optional): ")?,
            model: self.optional("Enter the model (optional): ")?,
            model_id: self.optional("Enter the model ID (optional): ")?,
            serial_number: self.optional("Enter the serial number (optional): ")?,
            hardware_version: self.optional("Enter the hardware version (optional): ")?,
            software_version: self.optional("Enter the software version (optional): ")?,
            configuration_url: self
                .optional("Enter the configuration URL !!!!Must be a valid address!!!! (optional): ")?,
        };

        let answers = DeviceAnswers {
            name,
            device_type,
            class,
            unit,
            unique_id,
            metadata,
        };
        Ok(assemble(&answers))
    }

    /// Renders a numbered class menu and resolves the 1-based answer,
    /// failing with the step's own diagnostic.
    fn pick_class(
        &mut self,
        heading: &str,
        table: &'static [ClassEntry],
        question: &str,
        invalid: WizardError,
    ) -> Result<ClassEntry, WizardError> {
        writeln!(self.output, "{}", heading)?;
        for (i, (class_name, _)) in table.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, class_name)?;
        }
        let answer = self.prompt(question)?;
        answer
            .parse()
            .ok()
            .and_then(|i| catalog::class_by_index(table, i))
            .ok_or(invalid)
    }

    fn prompt(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    fn optional(&mut self, question: &str) -> io::Result<Option<String>> {
        let answer = self.prompt(question)?;
        Ok(if answer.is_empty() { None } else { Some(answer) })
    }
}
