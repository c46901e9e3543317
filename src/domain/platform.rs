//! Marketplace platforms that scans are attributed to.
//!
//! The set is closed: every report carries exactly one slot per platform,
//! always iterated in canonical order (Mercado Livre, Shopee, Loja Integrada).

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::Serialize;

use super::error::DomainError;

/// Upstream marketplace integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformId {
    MercadoLivre,
    Shopee,
    LojaIntegrada,
}

impl PlatformId {
    /// All platforms in canonical order. Ties are broken by this order.
    pub const ALL: [PlatformId; 3] = [
        PlatformId::MercadoLivre,
        PlatformId::Shopee,
        PlatformId::LojaIntegrada,
    ];

    /// Stable key used on the command line, in config files and in JSON.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::MercadoLivre => "mercadolivre",
            Self::Shopee => "shopee",
            Self::LojaIntegrada => "loja_integrada",
        }
    }

    /// Human-facing platform name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::MercadoLivre => "Mercado Livre",
            Self::Shopee => "Shopee",
            Self::LojaIntegrada => "Loja Integrada",
        }
    }

    /// Percentage of a day's scans attributed to this platform.
    #[must_use]
    pub const fn split_percent(self) -> u32 {
        match self {
            Self::MercadoLivre => 45,
            Self::Shopee => 35,
            Self::LojaIntegrada => 20,
        }
    }

    const fn slot(self) -> usize {
        match self {
            Self::MercadoLivre => 0,
            Self::Shopee => 1,
            Self::LojaIntegrada => 2,
        }
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for PlatformId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|platform| platform.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| DomainError::UnknownPlatform(s.to_string()))
    }
}

/// Platform filter chosen by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlatformFilter {
    /// No filtering.
    #[default]
    All,
    /// Restrict to a single platform.
    Only(PlatformId),
}

impl PlatformFilter {
    /// Sentinel accepted for [`PlatformFilter::All`].
    pub const ALL_KEY: &'static str = "all";

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::All => Self::ALL_KEY,
            Self::Only(platform) => platform.key(),
        }
    }
}

impl fmt::Display for PlatformFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All platforms"),
            Self::Only(platform) => platform.fmt(f),
        }
    }
}

impl FromStr for PlatformFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(Self::ALL_KEY) {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

/// Scan counts keyed by platform, one slot per [`PlatformId`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlatformCounts([u32; 3]);

impl PlatformCounts {
    /// Build counts from values listed in canonical order.
    #[must_use]
    pub const fn new(mercadolivre: u32, shopee: u32, loja_integrada: u32) -> Self {
        Self([mercadolivre, shopee, loja_integrada])
    }

    #[must_use]
    pub fn get(&self, platform: PlatformId) -> u32 {
        self.0[platform.slot()]
    }

    /// Add another set of counts slot by slot.
    pub fn add(&mut self, other: &PlatformCounts) {
        for platform in PlatformId::ALL {
            self[platform] += other[platform];
        }
    }

    /// Sum over all platforms.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Iterate `(platform, count)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (PlatformId, u32)> + '_ {
        PlatformId::ALL.into_iter().map(|platform| (platform, self.get(platform)))
    }

    /// Platform with the highest count; the earliest platform wins ties.
    #[must_use]
    pub fn leader(&self) -> (PlatformId, u32) {
        let mut best = (PlatformId::MercadoLivre, self.get(PlatformId::MercadoLivre));
        for (platform, count) in self.iter().skip(1) {
            if count > best.1 {
                best = (platform, count);
            }
        }
        best
    }
}

impl Index<PlatformId> for PlatformCounts {
    type Output = u32;

    fn index(&self, platform: PlatformId) -> &u32 {
        &self.0[platform.slot()]
    }
}

impl IndexMut<PlatformId> for PlatformCounts {
    fn index_mut(&mut self, platform: PlatformId) -> &mut u32 {
        &mut self.0[platform.slot()]
    }
}

impl Serialize for PlatformCounts {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(PlatformId::ALL.len()))?;
        for (platform, count) in self.iter() {
            map.serialize_entry(platform.key(), &count)?;
        }
        map.end()
    }
}
