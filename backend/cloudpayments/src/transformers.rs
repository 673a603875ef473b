use common_enums::{Currency, ReasonCode, SubscriptionStatus, TransactionStatus};
use common_utils::{custom_serde, CustomResult, FloatMajorUnit, ParsingError};
use error_stack::{report, ResultExt};
use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;
use url::Url;

// Envelope

/// The wrapper the gateway puts around every REST payload:
/// `{"Success": bool, "Message": string|null, "Model": {...}}`.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GatewayResponse {
    pub success: bool,
    pub message: Option<String>,
    pub model: Option<serde_json::Value>,
}

impl GatewayResponse {
    pub fn from_value(value: serde_json::Value) -> CustomResult<Self, ParsingError> {
        serde_json::from_value(value)
            .change_context(ParsingError::StructParseFailure("GatewayResponse"))
    }

    /// Peel the `Model` document off the envelope so it can be handed to one
    /// of the model constructors.
    pub fn model_value(self) -> CustomResult<serde_json::Value, ParsingError> {
        self.model
            .ok_or(report!(ParsingError::MissingRequiredField("Model")))
    }
}

// Responses

/// One payment attempt as the gateway reports it. Field names follow the
/// wire document exactly; dates arrive both in the legacy wrapped-epoch form
/// and the ISO form.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransactionResponse {
    pub transaction_id: i64,
    pub amount: FloatMajorUnit,
    pub currency: Currency,
    pub currency_code: i64,
    pub invoice_id: Option<String>,
    pub account_id: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    pub json_data: Option<serde_json::Value>,
    #[serde(default, with = "custom_serde::wrapped_epoch::option")]
    pub created_date: Option<PrimitiveDateTime>,
    #[serde(default, with = "custom_serde::iso8601_no_tz::option")]
    pub created_date_iso: Option<PrimitiveDateTime>,
    #[serde(default, with = "custom_serde::wrapped_epoch::option")]
    pub auth_date: Option<PrimitiveDateTime>,
    #[serde(default, with = "custom_serde::iso8601_no_tz::option")]
    pub auth_date_iso: Option<PrimitiveDateTime>,
    #[serde(default, with = "custom_serde::wrapped_epoch::option")]
    pub confirm_date: Option<PrimitiveDateTime>,
    #[serde(default, with = "custom_serde::iso8601_no_tz::option")]
    pub confirm_date_iso: Option<PrimitiveDateTime>,
    pub auth_code: Option<String>,
    #[serde(default)]
    pub test_mode: bool,
    pub ip_address: Option<String>,
    pub ip_country: Option<String>,
    pub ip_city: Option<String>,
    pub ip_region: Option<String>,
    pub ip_district: Option<String>,
    pub ip_latitude: Option<f64>,
    pub ip_longitude: Option<f64>,
    pub card_first_six: Option<String>,
    pub card_last_four: Option<String>,
    pub card_exp_date: Option<String>,
    pub card_type: Option<String>,
    pub card_type_code: Option<i64>,
    pub issuer: Option<String>,
    pub issuer_bank_country: Option<String>,
    pub status: TransactionStatus,
    pub status_code: i64,
    pub reason: String,
    pub reason_code: ReasonCode,
    pub card_holder_message: Option<String>,
    pub name: Option<String>,
    pub token: Option<String>,
}

/// A 3-D Secure authentication challenge. `PaReq` is an opaque blob and may
/// contain embedded newlines which must survive verbatim.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Secure3dResponse {
    pub transaction_id: i64,
    pub pa_req: String,
    pub acs_url: Url,
}

/// An order created for payment by link.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderResponse {
    pub id: String,
    pub number: i64,
    pub amount: FloatMajorUnit,
    pub currency: Currency,
    pub currency_code: Option<i64>,
    pub email: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub require_confirmation: bool,
    pub url: Url,
}

/// A recurring-payment subscription.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubscriptionResponse {
    pub id: String,
    pub account_id: String,
    pub description: Option<String>,
    pub email: Option<String>,
    pub amount: FloatMajorUnit,
    pub currency: Currency,
    pub currency_code: Option<i64>,
    #[serde(default)]
    pub require_confirmation: bool,
    #[serde(default, with = "custom_serde::wrapped_epoch::option")]
    pub start_date: Option<PrimitiveDateTime>,
    #[serde(default, with = "custom_serde::iso8601_no_tz::option")]
    pub start_date_iso: Option<PrimitiveDateTime>,
    pub interval: String,
    pub period: i64,
    pub max_periods: Option<i64>,
    pub status: SubscriptionStatus,
    pub status_code: i64,
    #[serde(default)]
    pub successful_transactions_number: i64,
    #[serde(default)]
    pub failed_transactions_number: i64,
    #[serde(default, with = "custom_serde::wrapped_epoch::option")]
    pub last_transaction_date: Option<PrimitiveDateTime>,
    #[serde(default, with = "custom_serde::iso8601_no_tz::option")]
    pub last_transaction_date_iso: Option<PrimitiveDateTime>,
    #[serde(default, with = "custom_serde::wrapped_epoch::option")]
    pub next_transaction_date: Option<PrimitiveDateTime>,
    #[serde(default, with = "custom_serde::iso8601_no_tz::option")]
    pub next_transaction_date_iso: Option<PrimitiveDateTime>,
}

// Models

/// An immutable, fully-typed payment attempt. All timestamps are UTC; the
/// ISO member of each wire date pair wins over the wrapped-epoch one.
#[derive(Clone, Debug, PartialEq)]
pub struct Transaction {
    pub id: i64,
    pub amount: FloatMajorUnit,
    pub currency: Currency,
    pub currency_code: i64,
    pub invoice_id: Option<String>,
    pub account_id: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    /// Opaque merchant payload (`JsonData`), passed through unchanged.
    pub data: Option<serde_json::Value>,
    pub created_date: Option<PrimitiveDateTime>,
    pub auth_date: Option<PrimitiveDateTime>,
    pub confirm_date: Option<PrimitiveDateTime>,
    pub auth_code: Option<String>,
    pub test_mode: bool,
    pub ip_address: Option<String>,
    pub ip_country: Option<String>,
    pub ip_city: Option<String>,
    pub ip_region: Option<String>,
    pub ip_district: Option<String>,
    pub ip_latitude: Option<f64>,
    pub ip_longitude: Option<f64>,
    pub card_first_six: Option<String>,
    pub card_last_four: Option<String>,
    pub card_exp_date: Option<String>,
    pub card_type: Option<String>,
    pub card_type_code: Option<i64>,
    pub issuer: Option<String>,
    pub issuer_bank_country: Option<String>,
    pub status: TransactionStatus,
    /// Raw numeric status code as received, kept alongside the resolved enum.
    pub status_code: i64,
    pub reason: String,
    pub reason_code: ReasonCode,
    pub cardholder_message: Option<String>,
    pub name: Option<String>,
    pub token: Option<String>,
}

impl Transaction {
    /// Build a transaction from the parsed JSON body of a gateway response.
    /// Pure and idempotent; fails only structurally (missing required field,
    /// malformed date), never on unrecognized enum codes.
    pub fn from_value(value: serde_json::Value) -> CustomResult<Self, ParsingError> {
        let response: TransactionResponse = serde_json::from_value(value)
            .change_context(ParsingError::StructParseFailure("TransactionResponse"))?;
        Ok(Self::from(response))
    }
}

impl From<TransactionResponse> for Transaction {
    fn from(item: TransactionResponse) -> Self {
        Self {
            id: item.transaction_id,
            amount: item.amount,
            currency: item.currency,
            currency_code: item.currency_code,
            invoice_id: item.invoice_id,
            account_id: item.account_id,
            email: item.email,
            description: item.description,
            data: item.json_data,
            created_date: item.created_date_iso.or(item.created_date),
            auth_date: item.auth_date_iso.or(item.auth_date),
            confirm_date: item.confirm_date_iso.or(item.confirm_date),
            auth_code: item.auth_code,
            test_mode: item.test_mode,
            ip_address: item.ip_address,
            ip_country: item.ip_country,
            ip_city: item.ip_city,
            ip_region: item.ip_region,
            ip_district: item.ip_district,
            ip_latitude: item.ip_latitude,
            ip_longitude: item.ip_longitude,
            card_first_six: item.card_first_six,
            card_last_four: item.card_last_four,
            card_exp_date: item.card_exp_date,
            card_type: item.card_type,
            card_type_code: item.card_type_code,
            issuer: item.issuer,
            issuer_bank_country: item.issuer_bank_country,
            status: item.status,
            status_code: item.status_code,
            reason: item.reason,
            reason_code: item.reason_code,
            cardholder_message: item.card_holder_message,
            name: item.name,
            token: item.token,
        }
    }
}

/// A 3-D Secure challenge ready for browser redirection.
#[derive(Clone, Debug, PartialEq)]
pub struct Secure3d {
    pub transaction_id: i64,
    pub pa_req: String,
    pub acs_url: Url,
}

impl Secure3d {
    pub fn new(transaction_id: i64, pa_req: String, acs_url: Url) -> Self {
        Self {
            transaction_id,
            pa_req,
            acs_url,
        }
    }

    pub fn from_value(value: serde_json::Value) -> CustomResult<Self, ParsingError> {
        let response: Secure3dResponse = serde_json::from_value(value)
            .change_context(ParsingError::StructParseFailure("Secure3dResponse"))?;
        Ok(Self::from(response))
    }

    /// Build the issuer redirect URL for this challenge. The ACS contract
    /// takes exactly three query parameters, in this order: `MD` (our
    /// transaction id), `PaReq` (the blob, verbatim) and `TermUrl` (where
    /// the issuer sends the cardholder back). Values are intentionally not
    /// percent-encoded; the ACS expects the blob byte-for-byte.
    pub fn redirect_url(&self, term_url: &str) -> String {
        format!(
            "{}?MD={}&PaReq={}&TermUrl={}",
            self.acs_url, self.transaction_id, self.pa_req, term_url
        )
    }
}

impl From<Secure3dResponse> for Secure3d {
    fn from(item: Secure3dResponse) -> Self {
        Self {
            transaction_id: item.transaction_id,
            pa_req: item.pa_req,
            acs_url: item.acs_url,
        }
    }
}

/// An order payable by link.
#[derive(Clone, Debug, PartialEq)]
pub struct Order {
    pub id: String,
    pub number: i64,
    pub amount: FloatMajorUnit,
    pub currency: Currency,
    pub currency_code: Option<i64>,
    pub email: Option<String>,
    pub description: Option<String>,
    pub require_confirmation: bool,
    pub url: Url,
}

impl Order {
    pub fn from_value(value: serde_json::Value) -> CustomResult<Self, ParsingError> {
        let response: OrderResponse = serde_json::from_value(value)
            .change_context(ParsingError::StructParseFailure("OrderResponse"))?;
        Ok(Self::from(response))
    }
}

impl From<OrderResponse> for Order {
    fn from(item: OrderResponse) -> Self {
        Self {
            id: item.id,
            number: item.number,
            amount: item.amount,
            currency: item.currency,
            currency_code: item.currency_code,
            email: item.email,
            description: item.description,
            require_confirmation: item.require_confirmation,
            url: item.url,
        }
    }
}

/// A recurring-payment subscription. Dates are UTC; the ISO member of each
/// wire date pair wins over the wrapped-epoch one.
#[derive(Clone, Debug, PartialEq)]
pub struct Subscription {
    pub id: String,
    pub account_id: String,
    pub description: Option<String>,
    pub email: Option<String>,
    pub amount: FloatMajorUnit,
    pub currency: Currency,
    pub currency_code: Option<i64>,
    pub require_confirmation: bool,
    pub start_date: Option<PrimitiveDateTime>,
    pub interval: String,
    pub period: i64,
    pub max_periods: Option<i64>,
    pub status: SubscriptionStatus,
    pub status_code: i64,
    pub successful_transactions_number: i64,
    pub failed_transactions_number: i64,
    pub last_transaction_date: Option<PrimitiveDateTime>,
    pub next_transaction_date: Option<PrimitiveDateTime>,
}

impl Subscription {
    pub fn from_value(value: serde_json::Value) -> CustomResult<Self, ParsingError> {
        let response: SubscriptionResponse = serde_json::from_value(value)
            .change_context(ParsingError::StructParseFailure("SubscriptionResponse"))?;
        Ok(Self::from(response))
    }
}

impl From<SubscriptionResponse> for Subscription {
    fn from(item: SubscriptionResponse) -> Self {
        Self {
            id: item.id,
            account_id: item.account_id,
            description: item.description,
            email: item.email,
            amount: item.amount,
            currency: item.currency,
            currency_code: item.currency_code,
            require_confirmation: item.require_confirmation,
            start_date: item.start_date_iso.or(item.start_date),
            interval: item.interval,
            period: item.period,
            max_periods: item.max_periods,
            status: item.status,
            status_code: item.status_code,
            successful_transactions_number: item.successful_transactions_number,
            failed_transactions_number: item.failed_transactions_number,
            last_transaction_date: item.last_transaction_date_iso.or(item.last_transaction_date),
            next_transaction_date: item.next_transaction_date_iso.or(item.next_transaction_date),
        }
    }
}
