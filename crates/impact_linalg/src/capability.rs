//! The instruction-set tier the crate was compiled for.
//!
//! The tier is fixed at build time by `build.rs`, which derives it from the
//! target features (`-C target-feature`, `-C target-cpu`), the `scalar` cargo
//! feature and the `IMPACT_SIMD_TIER` environment variable. Every constant in
//! this module is resolved at compile time.

use std::fmt;

/// A family of SIMD instructions the register layer can be built on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SimdTier {
    /// Plain arrays and scalar loops.
    None,
    /// 128-bit SSE/SSE2 registers.
    Sse,
    /// SSE plus 256-bit floating point registers.
    Avx,
    /// AVX plus 256-bit integer registers.
    Avx2,
    /// 128-bit ARM NEON registers.
    Neon,
}

pub const SSE: bool = cfg!(impact_simd_sse);
pub const SSE41: bool = cfg!(impact_simd_sse41);
pub const AVX: bool = cfg!(impact_simd_avx);
pub const AVX2: bool = cfg!(impact_simd_avx2);
pub const NEON: bool = cfg!(impact_simd_neon);

/// Whether any SIMD register type is in use.
pub const SIMD: bool = SSE || NEON;

/// The tier the crate was compiled for.
pub const TIER: SimdTier = if AVX2 {
    SimdTier::Avx2
} else if AVX {
    SimdTier::Avx
} else if SSE {
    SimdTier::Sse
} else if NEON {
    SimdTier::Neon
} else {
    SimdTier::None
};

impl SimdTier {
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sse => "sse",
            Self::Avx => "avx",
            Self::Avx2 => "avx2",
            Self::Neon => "neon",
        }
    }

    /// The widest register this tier provides, in bytes.
    pub const fn register_width(self) -> usize {
        match self {
            Self::None => 0,
            Self::Sse | Self::Neon => 16,
            Self::Avx | Self::Avx2 => 32,
        }
    }
}

impl fmt::Display for SimdTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Logs the compiled SIMD tier and the individual instruction-set flags.
pub fn log_capabilities() {
    log::info!(
        "Using SIMD tier `{}` ({}-byte registers)",
        TIER,
        TIER.register_width()
    );
    log::debug!("SSE: {SSE}, SSE4.1: {SSE41}, AVX: {AVX}, AVX2: {AVX2}, NEON: {NEON}");
}
