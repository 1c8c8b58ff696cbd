//! `.qore` bytes → [`Circuit`].

use qore_ir::{Circuit, GateApplication, GateKind, IrResult, QubitId, registry};

use crate::error::{CodecError, CodecResult};
use crate::format::{
    CHECKSUM_LEN, FLAG_CHECKSUM, KNOWN_FLAGS, MAGIC, MAX_QUBITS, PARAM_WIDTH, QUBIT_WIDTH,
    VERSION, checksum, record_len,
};

/// Decode a `.qore` stream.
///
/// Records are framed and the checksum verified before any instruction is
/// validated, so a corrupted stream reports [`CodecError::ChecksumMismatch`]
/// rather than whatever invariant the corruption happens to break.
///
/// # Errors
///
/// Any [`CodecError`] except `CapacityExceeded`. No circuit is returned
/// unless the whole stream is valid.
pub fn decode(bytes: &[u8]) -> CodecResult<Circuit> {
    let mut cursor = Cursor::new(bytes);

    let magic = cursor.array::<4>()?;
    if magic != MAGIC {
        return Err(CodecError::BadMagic { found: magic });
    }

    let version = cursor.u16()?;
    if version != VERSION {
        return Err(CodecError::UnsupportedVersion {
            found: version,
            supported: VERSION,
        });
    }

    let flags = cursor.u16()?;
    if flags & !KNOWN_FLAGS != 0 {
        return Err(CodecError::MalformedHeader(format!(
            "unknown flag bits {:#06x}",
            flags & !KNOWN_FLAGS
        )));
    }

    let gateset_len = usize::from(cursor.u16()?);
    let gateset = std::str::from_utf8(cursor.take(gateset_len)?)
        .map_err(|e| CodecError::MalformedHeader(format!("gateset is not UTF-8: {e}")))?;

    let num_qubits = cursor.u32()?;
    if num_qubits == 0 || num_qubits > MAX_QUBITS {
        return Err(CodecError::MalformedHeader(format!(
            "qubit count {num_qubits} outside 1..={MAX_QUBITS}"
        )));
    }

    let count = cursor.u32()? as usize;

    // Every record is at least one byte, which bounds the allocation.
    let mut records = Vec::with_capacity(count.min(cursor.remaining()));
    let records_start = cursor.position();
    for index in 0..count {
        let opcode = cursor.u8()?;
        let kind = registry::from_opcode(opcode)
            .ok_or(CodecError::UnknownOpcode { opcode, index })?;
        let body = cursor.take(record_len(kind) - 1)?;
        records.push((kind, body));
    }
    let records_end = cursor.position();

    if flags & FLAG_CHECKSUM != 0 {
        let found = cursor.array::<CHECKSUM_LEN>()?;
        let expected = checksum(&bytes[records_start..records_end]);
        if found != expected {
            return Err(CodecError::ChecksumMismatch { expected, found });
        }
    }

    if cursor.remaining() > 0 {
        return Err(CodecError::TrailingBytes {
            count: cursor.remaining(),
        });
    }

    let mut builder = Circuit::builder(gateset, num_qubits)
        .map_err(|e| CodecError::MalformedHeader(e.to_string()))?;
    builder.reserve(records.len());
    for (index, (kind, body)) in records.into_iter().enumerate() {
        read_record(kind, body)
            .and_then(|app| builder.apply(app).map(|_| ()))
            .map_err(|source| CodecError::InvalidCircuit { index, source })?;
    }
    Ok(builder.build())
}

/// Rebuild one application from its operand bytes (opcode already consumed).
fn read_record(kind: GateKind, body: &[u8]) -> IrResult<GateApplication> {
    let (qubits, params) = body.split_at((kind.num_targets() + kind.num_controls()) * QUBIT_WIDTH);
    let mut qubits = qubits
        .chunks_exact(QUBIT_WIDTH)
        .map(|b| QubitId::from(u16::from_le_bytes([b[0], b[1]])));

    let targets: Vec<QubitId> = qubits.by_ref().take(kind.num_targets()).collect();
    let controls: Vec<QubitId> = qubits.collect();
    let params = params.chunks_exact(PARAM_WIDTH).map(|b| {
        let mut raw = [0u8; PARAM_WIDTH];
        raw.copy_from_slice(b);
        f64::from_le_bytes(raw)
    });

    GateApplication::new(kind, targets, controls, params)
}

/// Bounds-checked forward reader over a byte slice.
struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn position(&self) -> usize {
        self.pos
    }

    fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn take(&mut self, n: usize) -> CodecResult<&'a [u8]> {
        if self.remaining() < n {
            return Err(CodecError::TruncatedStream {
                offset: self.pos,
                needed: n,
                available: self.remaining(),
            });
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn array<const N: usize>(&mut self) -> CodecResult<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    fn u8(&mut self) -> CodecResult<u8> {
        Ok(self.array::<1>()?[0])
    }

    fn u16(&mut self) -> CodecResult<u16> {
        self.array().map(u16::from_le_bytes)
    }

    fn u32(&mut self) -> CodecResult<u32> {
        self.array().map(u32::from_le_bytes)
    }
}
