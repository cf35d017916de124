//! Selects the SIMD tier the crate is compiled for.
//!
//! The tier is the highest one enabled by the target features, unless the
//! `scalar` feature is active or `IMPACT_SIMD_TIER` requests a lower one. The
//! chosen tier is exposed to the crate as cumulative `impact_simd_*` cfg
//! flags.

use std::env;

const TIER_VAR: &str = "IMPACT_SIMD_TIER";

const CFG_FLAGS: [&str; 5] = [
    "impact_simd_sse",
    "impact_simd_sse41",
    "impact_simd_avx",
    "impact_simd_avx2",
    "impact_simd_neon",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tier {
    None,
    Sse,
    Avx,
    Avx2,
    Neon,
}

impl Tier {
    fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "none" | "scalar" => Some(Self::None),
            "sse" | "sse2" => Some(Self::Sse),
            "avx" => Some(Self::Avx),
            "avx2" => Some(Self::Avx2),
            "neon" => Some(Self::Neon),
            _ => None,
        }
    }

    fn rank(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Sse | Self::Neon => 1,
            Self::Avx => 2,
            Self::Avx2 => 3,
        }
    }

    fn is_x86(self) -> bool {
        matches!(self, Self::Sse | Self::Avx | Self::Avx2)
    }

    fn flags(self) -> &'static [&'static str] {
        match self {
            Self::None => &[],
            Self::Sse => &["impact_simd_sse"],
            Self::Avx => &["impact_simd_sse", "impact_simd_avx"],
            Self::Avx2 => &["impact_simd_sse", "impact_simd_avx", "impact_simd_avx2"],
            Self::Neon => &["impact_simd_neon"],
        }
    }
}

fn available_tier(arch: &str, features: &[&str]) -> Tier {
    let has = |feature: &str| features.contains(&feature);
    match arch {
        "x86" | "x86_64" if has("avx2") => Tier::Avx2,
        "x86" | "x86_64" if has("avx") => Tier::Avx,
        "x86" | "x86_64" if has("sse2") => Tier::Sse,
        "aarch64" if has("neon") => Tier::Neon,
        _ => Tier::None,
    }
}

fn select_tier(available: Tier, requested: Option<Tier>) -> Tier {
    let Some(requested) = requested else {
        return available;
    };
    if requested == Tier::None {
        return Tier::None;
    }
    let compatible = (requested.is_x86() && available.is_x86())
        || (requested == Tier::Neon && available == Tier::Neon);
    if !compatible {
        println!(
            "cargo::warning={TIER_VAR}={requested:?} is not supported by the target, using the scalar tier"
        );
        return Tier::None;
    }
    if requested.rank() > available.rank() {
        println!(
            "cargo::warning={TIER_VAR}={requested:?} exceeds the enabled target features, using {available:?}"
        );
        return available;
    }
    requested
}

fn main() {
    println!("cargo::rerun-if-changed=build.rs");
    println!("cargo::rerun-if-env-changed={TIER_VAR}");
    for flag in CFG_FLAGS {
        println!("cargo::rustc-check-cfg=cfg({flag})");
    }

    let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    let target_features = env::var("CARGO_CFG_TARGET_FEATURE").unwrap_or_default();
    let features: Vec<&str> = target_features.split(',').collect();

    let requested = match env::var(TIER_VAR) {
        Ok(name) => {
            let tier = Tier::parse(&name);
            if tier.is_none() {
                println!("cargo::warning=ignoring unknown {TIER_VAR} value `{name}`");
            }
            tier
        }
        Err(_) => None,
    };

    let tier = if env::var_os("CARGO_FEATURE_SCALAR").is_some() {
        Tier::None
    } else {
        select_tier(available_tier(&arch, &features), requested)
    };

    for flag in tier.flags() {
        println!("cargo::rustc-cfg={flag}");
    }
    if tier.is_x86() && features.contains(&"sse4.1") {
        println!("cargo::rustc-cfg=impact_simd_sse41");
    }
}
