//! [`Circuit`] → `.qore` bytes.

use qore_ir::{Circuit, GateApplication, QubitId};

use crate::error::{CodecError, CodecResult};
use crate::format::{
    CHECKSUM_LEN, FLAG_CHECKSUM, HEADER_FIXED_LEN, MAGIC, MAX_QUBITS, VERSION, checksum,
    record_len,
};

/// Encoder settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Append the checksum trailer.
    pub checksum: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self { checksum: true }
    }
}

impl EncodeOptions {
    /// Enable or disable the checksum trailer.
    #[must_use]
    pub fn with_checksum(mut self, checksum: bool) -> Self {
        self.checksum = checksum;
        self
    }
}

/// Encode a circuit with the default options (checksum trailer on).
pub fn encode(circuit: &Circuit) -> CodecResult<Vec<u8>> {
    encode_with(circuit, EncodeOptions::default())
}

/// Encode a circuit.
///
/// Output depends only on the circuit value and `options`: two calls with
/// equal inputs produce identical bytes on every platform.
///
/// # Errors
///
/// [`CodecError::CapacityExceeded`] if the qubit count, gateset length or
/// instruction count does not fit its header field.
pub fn encode_with(circuit: &Circuit, options: EncodeOptions) -> CodecResult<Vec<u8>> {
    let gateset = circuit.gateset().as_bytes();
    let gateset_len = u16::try_from(gateset.len()).map_err(|_| CodecError::CapacityExceeded {
        field: "gateset length",
        value: gateset.len() as u64,
        max: u64::from(u16::MAX),
    })?;

    if circuit.num_qubits() > MAX_QUBITS {
        return Err(CodecError::CapacityExceeded {
            field: "qubit count",
            value: u64::from(circuit.num_qubits()),
            max: u64::from(MAX_QUBITS),
        });
    }

    let count = u32::try_from(circuit.len()).map_err(|_| CodecError::CapacityExceeded {
        field: "instruction count",
        value: circuit.len() as u64,
        max: u64::from(u32::MAX),
    })?;

    let body_len: usize = circuit.iter().map(|app| record_len(app.kind())).sum();
    let mut out = Vec::with_capacity(HEADER_FIXED_LEN + gateset.len() + body_len + CHECKSUM_LEN);

    let flags = if options.checksum { FLAG_CHECKSUM } else { 0 };
    out.extend_from_slice(&MAGIC);
    put_u16(&mut out, VERSION);
    put_u16(&mut out, flags);
    put_u16(&mut out, gateset_len);
    out.extend_from_slice(gateset);
    put_u32(&mut out, circuit.num_qubits());
    put_u32(&mut out, count);

    let records_start = out.len();
    for app in circuit {
        write_record(&mut out, app);
    }

    if options.checksum {
        let digest = checksum(&out[records_start..]);
        out.extend_from_slice(&digest);
    }

    Ok(out)
}

fn write_record(out: &mut Vec<u8>, app: &GateApplication) {
    out.push(app.kind().opcode());
    for &qubit in app.targets().iter().chain(app.controls()) {
        put_u16(out, qubit_field(qubit));
    }
    for &param in app.params() {
        out.extend_from_slice(&param.to_le_bytes());
    }
}

// Indices are below num_qubits <= MAX_QUBITS, so they fit in 16 bits.
#[allow(clippy::cast_possible_truncation)]
fn qubit_field(qubit: QubitId) -> u16 {
    qubit.0 as u16
}

fn put_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_le_bytes());
}

fn put_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_le_bytes());
}
