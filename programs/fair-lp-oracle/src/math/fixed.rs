/// Every price, reserve and supply is brought to this many decimals before
/// the fair price formula runs.
pub const PRICE_DECIMALS: u8 = 18;

/// `10^PRICE_DECIMALS`, the fixed-point unit.
pub const PRICE_SCALE: u128 = 1_000_000_000_000_000_000;

/// Rescales `amount` from `decimals` to [`PRICE_DECIMALS`].
///
/// Scaling up is exact or `None` on overflow; scaling down truncates.
pub fn normalize(amount: u128, decimals: u8) -> Option<u128> {
    if decimals == PRICE_DECIMALS {
        Some(amount)
    } else if decimals < PRICE_DECIMALS {
        let factor = 10u128.checked_pow((PRICE_DECIMALS - decimals) as u32)?;
        amount.checked_mul(factor)
    } else {
        match 10u128.checked_pow((decimals - PRICE_DECIMALS) as u32) {
            Some(factor) => Some(amount / factor),
            // divisor exceeds u128::MAX, so every amount truncates to zero
            None => Some(0),
        }
    }
}
