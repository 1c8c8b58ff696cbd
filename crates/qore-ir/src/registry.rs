//! Process-wide gate registry.
//!
//! The registry is built once from [`GateKind::ALL`] plus a fixed alias table
//! and is read-only afterwards. Adding a gate is a recompilation concern.

use rustc_hash::FxHashMap;
use std::sync::LazyLock;

use crate::gate::{GateKind, GateSignature};

/// Alternative spellings accepted on input. Never used on output.
const ALIASES: &[(&str, GateKind)] = &[
    ("cx", GateKind::Cnot),
    ("sdg", GateKind::Si),
    ("tdg", GateKind::Ti),
    ("sx", GateKind::V),
    ("sxdg", GateKind::Vi),
];

static REGISTRY: LazyLock<GateRegistry> = LazyLock::new(GateRegistry::build);

/// Name and opcode lookup tables for the supported gates.
#[derive(Debug)]
pub struct GateRegistry {
    by_name: FxHashMap<&'static str, GateKind>,
    by_opcode: [Option<GateKind>; 256],
}

impl GateRegistry {
    /// The process-wide registry.
    pub fn global() -> &'static GateRegistry {
        &REGISTRY
    }

    fn build() -> Self {
        let mut by_name = FxHashMap::default();
        let mut by_opcode = [None; 256];

        for kind in GateKind::ALL {
            by_name.insert(kind.name(), kind);
            by_opcode[usize::from(kind.opcode())] = Some(kind);
        }
        for &(alias, kind) in ALIASES {
            by_name.insert(alias, kind);
        }

        Self { by_name, by_opcode }
    }

    /// Resolve a gate name, ignoring ASCII case.
    pub fn lookup(&self, name: &str) -> Option<GateKind> {
        if let Some(kind) = self.by_name.get(name) {
            return Some(*kind);
        }
        if name.bytes().any(|b| b.is_ascii_uppercase()) {
            return self.by_name.get(name.to_ascii_lowercase().as_str()).copied();
        }
        None
    }

    /// Resolve an opcode from the binary format.
    #[inline]
    pub fn from_opcode(&self, opcode: u8) -> Option<GateKind> {
        self.by_opcode[usize::from(opcode)]
    }

    /// Signatures of every gate, in opcode order.
    pub fn signatures(&self) -> impl Iterator<Item = GateSignature> + '_ {
        self.by_opcode.iter().flatten().map(|kind| kind.signature())
    }

    /// Accepted alternative spellings and the gate each resolves to.
    pub fn aliases(&self) -> impl Iterator<Item = (&'static str, GateKind)> + '_ {
        ALIASES.iter().copied()
    }

    /// Number of distinct gate kinds.
    pub fn len(&self) -> usize {
        self.by_opcode.iter().flatten().count()
    }

    /// Whether the registry holds no gate kinds.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Resolve a gate name against the global registry.
pub fn lookup(name: &str) -> Option<GateKind> {
    GateRegistry::global().lookup(name)
}

/// Resolve an opcode against the global registry.
pub fn from_opcode(opcode: u8) -> Option<GateKind> {
    GateRegistry::global().from_opcode(opcode)
}
