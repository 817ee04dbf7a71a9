//! Target system vocabularies shared across the tools.
//!
//! The compiler and assembler accept [`TargetSystem`]; the linker accepts
//! the wider [`LinkerTarget`] set (everything except `geos`, plus the
//! linker-only configurations). No validation happens here: an unsupported
//! combination is rejected by the external binary, not by this crate.

use std::fmt;

/// Target systems accepted by the compiler and assembler `--target` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSystem {
    None,
    Apple2,
    Apple2Enh,
    Atari,
    Atmos,
    C16,
    C64,
    C128,
    Cbm510,
    Cbm610,
    Geos,
    Lunix,
    Lynx,
    Nes,
    Pet,
    Plus4,
    Supervision,
    Vic20,
}

impl TargetSystem {
    pub fn as_str(self) -> &'static str {
        match self {
            TargetSystem::None => "none",
            TargetSystem::Apple2 => "apple2",
            TargetSystem::Apple2Enh => "apple2enh",
            TargetSystem::Atari => "atari",
            TargetSystem::Atmos => "atmos",
            TargetSystem::C16 => "c16",
            TargetSystem::C64 => "c64",
            TargetSystem::C128 => "c128",
            TargetSystem::Cbm510 => "cbm510",
            TargetSystem::Cbm610 => "cbm610",
            TargetSystem::Geos => "geos",
            TargetSystem::Lunix => "lunix",
            TargetSystem::Lynx => "lynx",
            TargetSystem::Nes => "nes",
            TargetSystem::Pet => "pet",
            TargetSystem::Plus4 => "plus4",
            TargetSystem::Supervision => "supervision",
            TargetSystem::Vic20 => "vic20",
        }
    }
}

impl fmt::Display for TargetSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target systems accepted by the linker `--target` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkerTarget {
    None,
    Apple2,
    Apple2Enh,
    Atari,
    Atmos,
    C16,
    C64,
    C128,
    Cbm510,
    Cbm610,
    Lunix,
    Lynx,
    Nes,
    Pet,
    Plus4,
    Supervision,
    Vic20,
    Module,
    Atari2600,
    AtariXl,
    GeosApple,
    GeosCbm,
    Sim6502,
    Sim65C02,
    Telestrat,
}

impl LinkerTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            LinkerTarget::None => "none",
            LinkerTarget::Apple2 => "apple2",
            LinkerTarget::Apple2Enh => "apple2enh",
            LinkerTarget::Atari => "atari",
            LinkerTarget::Atmos => "atmos",
            LinkerTarget::C16 => "c16",
            LinkerTarget::C64 => "c64",
            LinkerTarget::C128 => "c128",
            LinkerTarget::Cbm510 => "cbm510",
            LinkerTarget::Cbm610 => "cbm610",
            LinkerTarget::Lunix => "lunix",
            LinkerTarget::Lynx => "lynx",
            LinkerTarget::Nes => "nes",
            LinkerTarget::Pet => "pet",
            LinkerTarget::Plus4 => "plus4",
            LinkerTarget::Supervision => "supervision",
            LinkerTarget::Vic20 => "vic20",
            LinkerTarget::Module => "module",
            LinkerTarget::Atari2600 => "atari2600",
            LinkerTarget::AtariXl => "atarixl",
            LinkerTarget::GeosApple => "geos-apple",
            LinkerTarget::GeosCbm => "geos-cbm",
            LinkerTarget::Sim6502 => "sim6502",
            LinkerTarget::Sim65C02 => "sim65c02",
            LinkerTarget::Telestrat => "telestrat",
        }
    }
}

impl fmt::Display for LinkerTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
