use std::fmt;
use std::str::FromStr;

use crate::domain::validation::ValidationError;

/// Network names accepted by the `credit/topup` endpoint, sent as-is.
pub const TOP_UP_NETWORKS: [&str; 6] = ["mtn", "vodafone", "expresso", "airtel", "tigo", "glo"];

/// Returns `true` if `network` (already lowercased) is accepted by `credit/topup`.
///
/// Plain whitelist, not [`Carrier`]: the top-up endpoint takes the network name
/// rather than its code, so aliases such as `globacom` are rejected here.
pub fn is_top_up_network(network: &str) -> bool {
    TOP_UP_NETWORKS.contains(&network)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Mobile network operator known to the USP endpoints.
pub enum Carrier {
    Mtn,
    Vodafone,
    Expresso,
    Airtel,
    Tigo,
    /// Globacom; parses from both `glo` and `globacom`.
    Glo,
}

impl Carrier {
    /// JSON field name used by `usp/airtime` (`network`).
    pub const FIELD: &'static str = "network";

    pub const ALL: [Self; 6] = [
        Self::Mtn,
        Self::Vodafone,
        Self::Expresso,
        Self::Airtel,
        Self::Tigo,
        Self::Glo,
    ];

    /// Numeric network identifier expected by the USP endpoints.
    pub fn code(self) -> CarrierCode {
        CarrierCode(match self {
            Self::Mtn => 62001,
            Self::Vodafone => 62002,
            Self::Tigo => 62003,
            Self::Expresso => 62004,
            Self::Airtel => 62006,
            Self::Glo => 62007,
        })
    }

    /// Lowercase canonical name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Mtn => "mtn",
            Self::Vodafone => "vodafone",
            Self::Expresso => "expresso",
            Self::Airtel => "airtel",
            Self::Tigo => "tigo",
            Self::Glo => "glo",
        }
    }
}

impl FromStr for Carrier {
    type Err = ValidationError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Ok(match input.trim().to_lowercase().as_str() {
            "mtn" => Self::Mtn,
            "vodafone" => Self::Vodafone,
            "expresso" => Self::Expresso,
            "airtel" => Self::Airtel,
            "tigo" => Self::Tigo,
            "glo" | "globacom" => Self::Glo,
            _ => {
                return Err(ValidationError::UnknownCarrier {
                    input: input.to_owned(),
                });
            }
        })
    }
}

impl fmt::Display for Carrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Numeric carrier identifier (e.g. `62001` for MTN).
pub struct CarrierCode(u32);

impl CarrierCode {
    /// Get the underlying code.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CarrierCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Resolve a carrier name to its code, case-insensitively.
pub fn resolve(name: &str) -> Result<CarrierCode, ValidationError> {
    name.parse::<Carrier>().map(Carrier::code)
}
