//! Wire enumerations.
//!
//! Every enum here is declared with `wire_enum!`, so they all share the same
//! contract: known tokens decode to their variant, anything else decodes to
//! `Undefined`, and `Undefined` encodes as `"undefined"`.

mod compliance_provider;
mod crypto_sanctions_screening_provider;
mod currency_unit;
mod invoice_type;
mod on_chain_fee_target;
mod payment_direction;
mod region_code;
mod request_initiator;
mod risk_rating;
mod wallet_status;
mod webhook_event_type;
mod withdrawal_mode;

pub use compliance_provider::ComplianceProvider;
pub use crypto_sanctions_screening_provider::CryptoSanctionsScreeningProvider;
pub use currency_unit::CurrencyUnit;
pub use invoice_type::InvoiceType;
pub use on_chain_fee_target::OnChainFeeTarget;
pub use payment_direction::PaymentDirection;
pub use region_code::RegionCode;
pub use request_initiator::RequestInitiator;
pub use risk_rating::RiskRating;
pub use wallet_status::WalletStatus;
pub use webhook_event_type::WebhookEventType;
pub use withdrawal_mode::WithdrawalMode;
