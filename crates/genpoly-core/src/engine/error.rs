use thiserror::Error;

use super::config::ConfigError;

/// Problems with the coordinate list or its partitioning into chains.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Coordinate file must have at least 2 positions (found {found})")]
    TooFewCoordinates { found: usize },

    #[error("Cut point {cut} is out of range for {total} monomers")]
    CutOutOfRange { cut: usize, total: usize },

    #[error(
        "Chain {chain} (monomers {start}..{end}) has {len} monomer(s); every chain needs at least 2"
    )]
    ChainTooShort {
        chain: usize,
        start: usize,
        end: usize,
        len: usize,
    },
}

/// A monomer whose neighbors coincide, so no direction can be assigned to it.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Zero-length direction at monomer {index}: neighboring coordinates coincide")]
pub struct DegenerateGeometryError {
    pub index: usize,
}

/// Why a direction field could not be built for a run of coordinates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectionFieldError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Degenerate(#[from] DegenerateGeometryError),
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Degenerate geometry in chain {chain}: {source}")]
    DegenerateGeometry {
        chain: usize,
        source: DegenerateGeometryError,
    },
}
