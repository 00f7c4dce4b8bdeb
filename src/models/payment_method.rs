use serde::{Deserialize, Serialize};

/// Payment method chosen at the last wizard step. A label only; no
/// processor integration exists behind any of the variants.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Card,
    Upi,
    Netbanking,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [Self::Card, Self::Upi, Self::Netbanking];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Upi => "upi",
            Self::Netbanking => "netbanking",
        }
    }

    /// Human-readable label for the payment step.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Card => "Credit/Debit Card",
            Self::Upi => "UPI Payment",
            Self::Netbanking => "Net Banking",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "card" => Ok(Self::Card),
            "upi" => Ok(Self::Upi),
            "netbanking" => Ok(Self::Netbanking),
            _ => Err(format!("invalid payment method: {}", s)),
        }
    }
}
