//! CCTP domain ID types for identifying blockchain networks
//!
//! Circle's Cross-Chain Transfer Protocol addresses messages between chains
//! with small protocol-assigned domain IDs, distinct from the chains' native
//! chain IDs.
//!
//! Reference: <https://developers.circle.com/stablecoins/evm-smart-contracts>

use std::fmt;

/// CCTP domain identifier for a blockchain network
///
/// The numeric value is the protocol's domain assignment, not the chain id.
///
/// # Example
///
/// ```rust
/// use cctp_solver::DomainId;
///
/// assert_eq!(DomainId::Ethereum.as_u32(), 0);
/// assert_eq!(DomainId::Base.as_u32(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
#[non_exhaustive]
pub enum DomainId {
    /// Ethereum mainnet (Domain ID: 0)
    Ethereum = 0,
    /// Avalanche C-Chain (Domain ID: 1)
    Avalanche = 1,
    /// Optimism (Domain ID: 2)
    Optimism = 2,
    /// Arbitrum One (Domain ID: 3)
    Arbitrum = 3,
    /// Base (Domain ID: 6)
    Base = 6,
    /// Polygon PoS (Domain ID: 7)
    Polygon = 7,
}

impl DomainId {
    /// Returns the numeric domain ID value
    #[inline]
    pub const fn as_u32(self) -> u32 {
        self as u32
    }

    /// Attempts to create a DomainId from a u32 value
    #[inline]
    pub const fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(Self::Ethereum),
            1 => Some(Self::Avalanche),
            2 => Some(Self::Optimism),
            3 => Some(Self::Arbitrum),
            6 => Some(Self::Base),
            7 => Some(Self::Polygon),
            _ => None,
        }
    }

    /// Returns the chain name as a string
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ethereum => "Ethereum",
            Self::Avalanche => "Avalanche",
            Self::Optimism => "Optimism",
            Self::Arbitrum => "Arbitrum",
            Self::Base => "Base",
            Self::Polygon => "Polygon",
        }
    }
}

impl From<DomainId> for u32 {
    #[inline]
    fn from(domain: DomainId) -> Self {
        domain.as_u32()
    }
}

impl fmt::Display for DomainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.as_u32())
    }
}
