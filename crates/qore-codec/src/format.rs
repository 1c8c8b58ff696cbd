//! Wire format v1 constants and layout helpers.
//!
//! ```text
//! offset  size  field
//! 0       4     magic "QORE"
//! 4       2     version (u16)
//! 6       2     flags (u16, bit 0 = checksum trailer)
//! 8       2     gateset length L (u16)
//! 10      L     gateset (UTF-8)
//! 10+L    4     qubit count (u32)
//! 14+L    4     instruction count (u32)
//! 18+L    ...   records
//! end-8   8     checksum trailer (if flagged)
//! ```
//!
//! A record is the opcode byte followed by the target indices, the control
//! indices (both u16) and the parameters (f64), with counts implied by the
//! opcode. All integers are little-endian.

use qore_ir::GateKind;
use sha2::{Digest, Sha256};

pub const MAGIC: [u8; 4] = *b"QORE";
pub const VERSION: u16 = 1;

/// Flag bit: an 8-byte checksum trailer follows the records.
pub const FLAG_CHECKSUM: u16 = 0x0001;
pub const KNOWN_FLAGS: u16 = FLAG_CHECKSUM;

/// Largest register a u16 qubit index can address.
pub const MAX_QUBITS: u32 = 1 << 16;

pub const CHECKSUM_LEN: usize = 8;

/// Bytes in the header, not counting the gateset string.
pub const HEADER_FIXED_LEN: usize = 18;

pub(crate) const QUBIT_WIDTH: usize = 2;
pub(crate) const PARAM_WIDTH: usize = 8;

/// Encoded size of one record for `kind`, opcode included.
pub const fn record_len(kind: GateKind) -> usize {
    1 + (kind.num_targets() + kind.num_controls()) * QUBIT_WIDTH + kind.num_params() * PARAM_WIDTH
}

/// Truncated SHA-256 over the record bytes.
pub(crate) fn checksum(records: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = Sha256::digest(records);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&digest[..CHECKSUM_LEN]);
    out
}
