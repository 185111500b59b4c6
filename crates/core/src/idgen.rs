use rand::rngs::OsRng;
use rand::RngCore;

/// Builds a unique id from the device name plus a 4-hex-char uppercase
/// suffix drawn from the OS RNG. Collisions across runs are only as
/// unlikely as 16 bits of entropy allow, which is enough for a manually
/// operated generator.
pub fn unique_id(name: &str) -> String {
    let mut bytes = [0u8; 2];
    OsRng.fill_bytes(&mut bytes);
    format!("{}{:02X}{:02X}", name, bytes[0], bytes[1])
}
