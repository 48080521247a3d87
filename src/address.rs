use anyhow::{anyhow, Result};
use sha3::{Digest, Keccak256};

/// Normalize an Ethereum address to its EIP-55 checksummed form.
///
/// Accepts the address with or without a `0x` prefix and in any letter case.
/// Fails if the address is not exactly 40 hex characters — a bad input
/// address fails the whole invocation rather than being silently skipped.
pub fn to_checksum_address(address: &str) -> Result<String> {
    let hex = address.strip_prefix("0x").unwrap_or(address);
    if hex.len() != 40 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(anyhow!("Invalid Ethereum address: {}", address));
    }

    let lower = hex.to_ascii_lowercase();
    let hash = Keccak256::digest(lower.as_bytes());

    // EIP-55: uppercase a letter when the corresponding hash nibble is >= 8
    let mut out = String::with_capacity(42);
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let nibble = if i % 2 == 0 {
            hash[i / 2] >> 4
        } else {
            hash[i / 2] & 0x0f
        };
        if c.is_ascii_alphabetic() && nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    Ok(out)
}
