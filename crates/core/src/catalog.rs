// Class catalogs baked into the wizard. Order matters: menus are rendered
// from these tables and answers are resolved by 1-based index.

pub type ClassEntry = (&'static str, &'static [&'static str]);

const ON_OFF: &[&str] = &["on_off"];

pub const SENSOR_CLASSES: &[ClassEntry] = &[
    ("apparent_power", &["VA"]),
    ("aqi", &["unitless"]),
    ("area", &["m²", "cm²", "km²", "mm²", "in²", "ft²", "yd²", "mi²", "ac", "ha"]),
    ("atmospheric_pressure", &["cbar", "bar", "hPa", "mmHg", "inHg", "kPa", "mbar", "Pa", "psi"]),
    ("battery", &["%"]),
    ("blood_glucose_concentration", &["mg/dL", "mmol/L"]),
    ("carbon_dioxide", &["ppm"]),
    ("carbon_monoxide", &["ppm"]),
    ("current", &["A", "mA"]),
    ("data_rate", &["bit/s", "kbit/s", "Mbit/s", "Gbit/s", "B/s", "kB/s", "MB/s", "GB/s", "KiB/s", "MiB/s", "GiB/s"]),
    ("data_size", &["bit", "kbit", "Mbit", "Gbit", "B", "kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB", "ZiB", "YiB"]),
    ("date", &["ISO 8601"]),
    ("distance", &["km", "m", "cm", "mm", "mi", "nmi", "yd", "in"]),
    ("duration", &["d", "h", "min", "s", "ms"]),
    ("energy", &["J", "kJ", "MJ", "GJ", "mWh", "Wh", "kWh", "MWh", "GWh", "TWh", "cal", "kcal", "Mcal", "Gcal"]),
    ("energy_storage", &["J", "kJ", "MJ", "GJ", "mWh", "Wh", "kWh", "MWh", "GWh", "TWh", "cal", "kcal", "Mcal", "Gcal"]),
    ("enum", &["non-numeric states"]),
    ("frequency", &["Hz", "kHz", "MHz", "GHz"]),
    ("gas", &["m³", "ft³", "CCF"]),
    ("humidity", &["%"]),
    ("illuminance", &["lx"]),
    ("irradiance", &["W/m²", "BTU/(h⋅ft²)"]),
    ("moisture", &["%"]),
    ("monetary", &["ISO 4217"]),
    ("nitrogen_dioxide", &["µg/m³"]),
    ("nitrogen_monoxide", &["µg/m³"]),
    ("nitrous_oxide", &["µg/m³"]),
    ("ozone", &["µg/m³"]),
    ("ph", &["pH"]),
    ("pm1", &["µg/m³"]),
    ("pm25", &["µg/m³"]),
    ("pm10", &["µg/m³"]),
    ("power_factor", &["unitless", "%"]),
    ("power", &["mW", "W", "kW", "MW", "GW", "TW"]),
    ("precipitation", &["cm", "in", "mm"]),
    ("precipitation_intensity", &["in/d", "in/h", "mm/d", "mm/h"]),
    ("pressure", &["Pa", "kPa", "hPa", "bar", "cbar", "mbar", "mmHg", "inHg", "psi"]),
    ("reactive_power", &["var"]),
    ("signal_strength", &["dB", "dBm"]),
    ("sound_pressure", &["dB", "dBA"]),
    ("speed", &["ft/s", "in/d", "in/h", "in/s", "km/h", "kn", "m/s", "mph", "mm/d", "mm/s"]),
    ("sulphur_dioxide", &["µg/m³"]),
    ("temperature", &["°C", "°F", "K"]),
    ("timestamp", &["ISO 8601"]),
    ("volatile_organic_compounds", &["µg/m³"]),
    ("volatile_organic_compounds_parts", &["ppm", "ppb"]),
    ("voltage", &["V", "mV", "µV"]),
    ("volume", &["L", "mL", "gal", "fl. oz.", "m³", "ft³", "CCF"]),
    ("volume_flow_rate", &["m³/h", "ft³/min", "L/min", "gal/min", "mL/s"]),
    ("volume_storage", &["L", "mL", "gal", "fl. oz.", "m³", "ft³", "CCF"]),
    ("water", &["L", "gal", "m³", "ft³", "CCF"]),
    ("weight", &["kg", "g", "mg", "µg", "oz", "lb", "st"]),
    ("wind_speed", &["Beaufort", "ft/s", "km/h", "kn", "m/s", "mph"]),
];

pub const BINARY_SENSOR_CLASSES: &[ClassEntry] = &[
    ("none", ON_OFF),
    ("battery", ON_OFF),
    ("battery_charging", ON_OFF),
    ("carbon_monoxide", ON_OFF),
    ("cold", ON_OFF),
    ("connectivity", ON_OFF),
    ("door", ON_OFF),
    ("garage_door", ON_OFF),
    ("gas", ON_OFF),
    ("heat", ON_OFF),
    ("light", ON_OFF),
    ("lock", ON_OFF),
    ("moisture", ON_OFF),
    ("motion", ON_OFF),
    ("moving", ON_OFF),
    ("occupancy", ON_OFF),
    ("opening", ON_OFF),
    ("plug", ON_OFF),
    ("power", ON_OFF),
    ("presence", ON_OFF),
    ("problem", ON_OFF),
    ("running", ON_OFF),
    ("safety", ON_OFF),
    ("smoke", ON_OFF),
    ("sound", ON_OFF),
    ("tamper", ON_OFF),
    ("update", ON_OFF),
    ("vibration", ON_OFF),
    ("window", ON_OFF),
];

// The capitalized "None" is how the protocol spells the no-op button class.
pub const BUTTON_CLASSES: &[ClassEntry] = &[
    ("None", ON_OFF),
    ("identify", ON_OFF),
    ("restart", ON_OFF),
    ("update", ON_OFF),
];

/// Resolve a 1-based menu selection against an ordered catalog.
pub fn class_by_index(table: &'static [ClassEntry], index: usize) -> Option<ClassEntry> {
    if index == 0 {
        return None;
    }
    table.get(index - 1).copied()
}

/// Resolve a 1-based menu selection against a unit/state list.
pub fn unit_by_index(units: &'static [&'static str], index: usize) -> Option<&'static str> {
    if index == 0 {
        return None;
    }
    units.get(index - 1).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_sizes() {
        assert_eq!(SENSOR_CLASSES.len(), 53);
        assert_eq!(BINARY_SENSOR_CLASSES.len(), 29);
        assert_eq!(BUTTON_CLASSES.len(), 4);
    }

    #[test]
    fn sensor_lookup_is_one_based() {
        assert_eq!(class_by_index(SENSOR_CLASSES, 1).unwrap().0, "apparent_power");
        assert_eq!(class_by_index(SENSOR_CLASSES, 53).unwrap().0, "wind_speed");
        assert!(class_by_index(SENSOR_CLASSES, 0).is_none());
        assert!(class_by_index(SENSOR_CLASSES, 54).is_none());
    }

    #[test]
    fn temperature_units() {
        let (name, units) = class_by_index(SENSOR_CLASSES, 43).unwrap();
        assert_eq!(name, "temperature");
        assert_eq!(units, &["°C", "°F", "K"]);
        assert_eq!(unit_by_index(units, 1), Some("°C"));
        assert_eq!(unit_by_index(units, 4), None);
        assert_eq!(unit_by_index(units, 0), None);
    }

    #[test]
    fn binary_and_button_classes_share_states() {
        for (_, states) in BINARY_SENSOR_CLASSES.iter().chain(BUTTON_CLASSES) {
            assert_eq!(*states, ON_OFF);
        }
        assert_eq!(class_by_index(BINARY_SENSOR_CLASSES, 7).unwrap().0, "door");
        assert_eq!(class_by_index(BUTTON_CLASSES, 1).unwrap().0, "None");
    }
}
