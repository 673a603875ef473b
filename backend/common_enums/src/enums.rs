use std::str::FromStr;

/// The ISO-like currency code the gateway reports on every transaction
/// (e.g. `"RUB"`). A parallel numeric `CurrencyCode` travels alongside it on
/// the wire; the raw numeric value is always preserved on the owning model.
///
/// Codes outside the supported set resolve to [`Currency::Unknown`] carrying
/// the raw string, never to an error: the gateway's code space may grow and a
/// hard failure would break forward compatibility.
#[derive(
    Clone,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(from = "String", into = "String")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Currency {
    Rub,
    Usd,
    Eur,
    Gbp,
    #[strum(default, to_string = "{0}")]
    Unknown(String),
}

impl Currency {
    /// Resolve the gateway's numeric `CurrencyCode` companion value.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Rub),
            1 => Some(Self::Usd),
            2 => Some(Self::Eur),
            3 => Some(Self::Gbp),
            _ => None,
        }
    }

    /// The numeric code the gateway uses for this currency, if it is a
    /// recognized one.
    pub fn code(&self) -> Option<i64> {
        match self {
            Self::Rub => Some(0),
            Self::Usd => Some(1),
            Self::Eur => Some(2),
            Self::Gbp => Some(3),
            Self::Unknown(_) => None,
        }
    }
}

impl From<String> for Currency {
    fn from(value: String) -> Self {
        let currency = Self::from_str(&value).unwrap_or(Self::Unknown(value));
        if let Self::Unknown(raw) = &currency {
            tracing::warn!(code = %raw, "unrecognized currency code received from the gateway");
        }
        currency
    }
}

impl From<Currency> for String {
    fn from(value: Currency) -> Self {
        value.to_string()
    }
}

/// Transaction lifecycle status as reported by the gateway, by string name.
/// The raw numeric `StatusCode` is preserved separately on the transaction.
#[derive(
    Clone,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(from = "String", into = "String")]
pub enum TransactionStatus {
    AwaitingAuthentication,
    Authorized,
    Completed,
    Cancelled,
    Declined,
    #[strum(default, to_string = "{0}")]
    Unknown(String),
}

impl TransactionStatus {
    /// Resolve the gateway's numeric `StatusCode` companion value.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::AwaitingAuthentication),
            2 => Some(Self::Authorized),
            3 => Some(Self::Completed),
            4 => Some(Self::Cancelled),
            5 => Some(Self::Declined),
            _ => None,
        }
    }

    pub fn code(&self) -> Option<i64> {
        match self {
            Self::AwaitingAuthentication => Some(1),
            Self::Authorized => Some(2),
            Self::Completed => Some(3),
            Self::Cancelled => Some(4),
            Self::Declined => Some(5),
            Self::Unknown(_) => None,
        }
    }

    /// Whether the gateway will no longer move this transaction forward.
    pub fn is_terminal_status(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled | Self::Declined)
    }
}

impl From<String> for TransactionStatus {
    fn from(value: String) -> Self {
        let status = Self::from_str(&value).unwrap_or(Self::Unknown(value));
        if let Self::Unknown(raw) = &status {
            tracing::warn!(status = %raw, "unrecognized transaction status received from the gateway");
        }
        status
    }
}

impl From<TransactionStatus> for String {
    fn from(value: TransactionStatus) -> Self {
        value.to_string()
    }
}

/// Why the issuer (or the gateway's antifraud layer) declined or approved a
/// transaction, keyed by the gateway's numeric `ReasonCode`. A free-text
/// `Reason` mirror travels alongside it on the wire.
#[derive(
    Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize, strum::Display,
)]
#[serde(from = "i64", into = "i64")]
pub enum ReasonCode {
    Approved,
    ReferToCardIssuer,
    InvalidMerchant,
    PickUpCard,
    DoNotHonor,
    Error,
    PickUpCardSpecialConditions,
    InvalidTransaction,
    AmountError,
    InvalidCardNumber,
    NoSuchIssuer,
    TransactionError,
    FormatError,
    BankNotSupportedBySwitch,
    ExpiredCardPickup,
    SuspectedFraud,
    RestrictedCard,
    LostCard,
    StolenCard,
    InsufficientFunds,
    ExpiredCard,
    TransactionNotPermitted,
    ExceedWithdrawalFrequency,
    IncorrectCvv,
    Timeout,
    CannotReachNetwork,
    SystemError,
    UnableToProcess,
    AuthenticationFailed,
    AuthenticationUnavailable,
    AntiFraud,
    #[strum(to_string = "{0}")]
    Unknown(i64),
}

impl ReasonCode {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Approved),
            5001 => Some(Self::ReferToCardIssuer),
            5003 => Some(Self::InvalidMerchant),
            5004 => Some(Self::PickUpCard),
            5005 => Some(Self::DoNotHonor),
            5006 => Some(Self::Error),
            5007 => Some(Self::PickUpCardSpecialConditions),
            5012 => Some(Self::InvalidTransaction),
            5013 => Some(Self::AmountError),
            5014 => Some(Self::InvalidCardNumber),
            5015 => Some(Self::NoSuchIssuer),
            5019 => Some(Self::TransactionError),
            5030 => Some(Self::FormatError),
            5031 => Some(Self::BankNotSupportedBySwitch),
            5033 => Some(Self::ExpiredCardPickup),
            5034 => Some(Self::SuspectedFraud),
            5036 => Some(Self::RestrictedCard),
            5041 => Some(Self::LostCard),
            5043 => Some(Self::StolenCard),
            5051 => Some(Self::InsufficientFunds),
            5054 => Some(Self::ExpiredCard),
            5057 => Some(Self::TransactionNotPermitted),
            5065 => Some(Self::ExceedWithdrawalFrequency),
            5082 => Some(Self::IncorrectCvv),
            5091 => Some(Self::Timeout),
            5092 => Some(Self::CannotReachNetwork),
            5096 => Some(Self::SystemError),
            5204 => Some(Self::UnableToProcess),
            5206 => Some(Self::AuthenticationFailed),
            5207 => Some(Self::AuthenticationUnavailable),
            5300 => Some(Self::AntiFraud),
            _ => None,
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            Self::Approved => 0,
            Self::ReferToCardIssuer => 5001,
            Self::InvalidMerchant => 5003,
            Self::PickUpCard => 5004,
            Self::DoNotHonor => 5005,
            Self::Error => 5006,
            Self::PickUpCardSpecialConditions => 5007,
            Self::InvalidTransaction => 5012,
            Self::AmountError => 5013,
            Self::InvalidCardNumber => 5014,
            Self::NoSuchIssuer => 5015,
            Self::TransactionError => 5019,
            Self::FormatError => 5030,
            Self::BankNotSupportedBySwitch => 5031,
            Self::ExpiredCardPickup => 5033,
            Self::SuspectedFraud => 5034,
            Self::RestrictedCard => 5036,
            Self::LostCard => 5041,
            Self::StolenCard => 5043,
            Self::InsufficientFunds => 5051,
            Self::ExpiredCard => 5054,
            Self::TransactionNotPermitted => 5057,
            Self::ExceedWithdrawalFrequency => 5065,
            Self::IncorrectCvv => 5082,
            Self::Timeout => 5091,
            Self::CannotReachNetwork => 5092,
            Self::SystemError => 5096,
            Self::UnableToProcess => 5204,
            Self::AuthenticationFailed => 5206,
            Self::AuthenticationUnavailable => 5207,
            Self::AntiFraud => 5300,
            Self::Unknown(code) => *code,
        }
    }
}

impl From<i64> for ReasonCode {
    fn from(code: i64) -> Self {
        Self::from_code(code).unwrap_or_else(|| {
            tracing::warn!(code, "unrecognized reason code received from the gateway");
            Self::Unknown(code)
        })
    }
}

impl From<ReasonCode> for i64 {
    fn from(value: ReasonCode) -> Self {
        value.code()
    }
}

/// Status of a recurring-payment subscription, by string name. The numeric
/// `StatusCode` companion is preserved on the subscription model.
#[derive(
    Clone,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(from = "String", into = "String")]
pub enum SubscriptionStatus {
    Active,
    PastDue,
    Cancelled,
    Rejected,
    Expired,
    #[strum(default, to_string = "{0}")]
    Unknown(String),
}

impl SubscriptionStatus {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Active),
            1 => Some(Self::PastDue),
            2 => Some(Self::Cancelled),
            3 => Some(Self::Rejected),
            4 => Some(Self::Expired),
            _ => None,
        }
    }

    pub fn code(&self) -> Option<i64> {
        match self {
            Self::Active => Some(0),
            Self::PastDue => Some(1),
            Self::Cancelled => Some(2),
            Self::Rejected => Some(3),
            Self::Expired => Some(4),
            Self::Unknown(_) => None,
        }
    }
}

impl From<String> for SubscriptionStatus {
    fn from(value: String) -> Self {
        let status = Self::from_str(&value).unwrap_or(Self::Unknown(value));
        if let Self::Unknown(raw) = &status {
            tracing::warn!(status = %raw, "unrecognized subscription status received from the gateway");
        }
        status
    }
}

impl From<SubscriptionStatus> for String {
    fn from(value: SubscriptionStatus) -> Self {
        value.to_string()
    }
}
