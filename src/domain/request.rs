use crate::domain::carrier::Carrier;
use crate::domain::validation::ValidationError;
use crate::domain::value::{
    AccountNumber, Amount, BundleAmount, BundleCode, LineType, MobileNumber, ServiceKind,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Airtime credit top-up via `credit/topup`.
///
/// Fields are kept as provided; [`crate::CreditTopUp::top_it_up`] validates them at
/// call time and reports failures through its result.
pub struct TopUpRequest {
    /// Subscriber number, `233xxxxxxxxx`.
    pub phone: String,
    /// Network name, matched case-insensitively against
    /// [`TOP_UP_NETWORKS`](crate::domain::TOP_UP_NETWORKS).
    pub network: String,
    pub line_type: LineType,
    /// Whole Ghana cedis, must be positive.
    pub amount: u32,
    /// `GET` or `POST` (any case). Defaults to `GET`.
    pub method: Option<String>,
}

impl TopUpRequest {
    pub fn new(
        phone: impl Into<String>,
        network: impl Into<String>,
        line_type: LineType,
        amount: u32,
    ) -> Self {
        Self {
            phone: phone.into(),
            network: network.into(),
            line_type,
            amount,
            method: None,
        }
    }

    /// Set the HTTP method used for the call.
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One call against the USP (utility services) endpoints.
///
/// Every constructor validates its arguments before anything is sent, so a value
/// of this type is always well-formed.
pub enum UtilityOperation {
    AirtimeTopUp {
        carrier: Carrier,
        amount: Amount,
        phone: MobileNumber,
    },
    DstvPayment {
        account: AccountNumber,
        amount: Amount,
    },
    SurflineQuery {
        device: MobileNumber,
    },
    SurflineBundlePurchase {
        device: MobileNumber,
        amount: BundleAmount,
        bundle: Option<BundleCode>,
    },
    VodafoneInternetPayment {
        account: AccountNumber,
        amount: Amount,
    },
    VodafoneBillPayment {
        account: AccountNumber,
        amount: Amount,
        service: ServiceKind,
    },
    BalanceQuery,
}

impl UtilityOperation {
    /// Top up airtime on `phone` through the carrier named `network`.
    pub fn topup_airtime(network: &str, amount: u32, phone: &str) -> Result<Self, ValidationError> {
        Ok(Self::AirtimeTopUp {
            carrier: network.parse()?,
            amount: Amount::new(amount)?,
            phone: MobileNumber::new(phone)?,
        })
    }

    pub fn pay_dstv(account: &str, amount: u32) -> Result<Self, ValidationError> {
        Ok(Self::DstvPayment {
            account: AccountNumber::new(account)?,
            amount: Amount::new(amount)?,
        })
    }

    pub fn query_surfline_device(device: &str) -> Result<Self, ValidationError> {
        Ok(Self::SurflineQuery {
            device: MobileNumber::new(device)?,
        })
    }

    /// Buy a Surfline Plus bundle worth `amount` (one of 1, 5, 10, 20, 50).
    pub fn bundle_surfline_plus(device: &str, amount: u32) -> Result<Self, ValidationError> {
        Ok(Self::SurflineBundlePurchase {
            device: MobileNumber::new(device)?,
            amount: BundleAmount::new(amount)?,
            bundle: None,
        })
    }

    /// Buy a specific Surfline bundle worth `amount` (one of 1, 5, 10, 20, 50).
    pub fn bundle_surfline(device: &str, amount: u32, bundle: &str) -> Result<Self, ValidationError> {
        Ok(Self::SurflineBundlePurchase {
            device: MobileNumber::new(device)?,
            amount: BundleAmount::new(amount)?,
            bundle: Some(BundleCode::new(bundle)?),
        })
    }

    pub fn pay_vodafone_internet(account: &str, amount: u32) -> Result<Self, ValidationError> {
        Ok(Self::VodafoneInternetPayment {
            account: AccountNumber::new(account)?,
            amount: Amount::new(amount)?,
        })
    }

    /// Pay a Vodafone bill; `service` must be exactly `postpaid` or `broadband`.
    pub fn pay_vodafone_bills(
        account: &str,
        amount: u32,
        service: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self::VodafoneBillPayment {
            account: AccountNumber::new(account)?,
            amount: Amount::new(amount)?,
            service: service.parse()?,
        })
    }

    pub fn account_balance() -> Self {
        Self::BalanceQuery
    }

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AirtimeTopUp { .. } => "airtime",
            Self::DstvPayment { .. } => "dstv",
            Self::SurflineQuery { .. } => "surfline",
            Self::SurflineBundlePurchase { .. } => "surflineplus",
            Self::VodafoneInternetPayment { .. } => "vodafone-internet",
            Self::VodafoneBillPayment { .. } => "vodafone",
            Self::BalanceQuery => "account",
        }
    }
}
