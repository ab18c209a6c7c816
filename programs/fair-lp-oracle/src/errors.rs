use anchor_lang::prelude::*;

#[error_code]
pub enum OracleError {
    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("No price source registered for asset")]
    SourceNotRegistered,

    #[msg("Registry account does not match the asset's price source address")]
    RegistryAccountMismatch,

    #[msg("Could not read a consistent reserve snapshot for the pool")]
    ReserveReadFailure,

    #[msg("Could not read the reference price source")]
    SourceReadFailure,

    #[msg("Price is stale")]
    StalePrice,

    #[msg("Invalid price (must be positive)")]
    InvalidPrice,

    #[msg("Arithmetic overflow or zero LP supply")]
    ArithmeticOverflow,

    #[msg("Fair price truncates to zero")]
    PriceUnderflow,

    #[msg("No cached price for pool")]
    NoCachedPrice,

    #[msg("Label too long (max 16 bytes)")]
    LabelTooLong,

    #[msg("Invalid decimals (max 18)")]
    InvalidDecimals,

    #[msg("Staleness window must not be negative")]
    InvalidStaleness,

    #[msg("Signer is not the feed's updater")]
    UnauthorizedUpdater,

    #[msg("PDA bump not found")]
    BumpNotFound,

    #[msg("Price source must not be the default key")]
    InvalidPriceSource,
}
