//! Fair LP token price.
//!
//! `price = 2 * sqrt(R0 * R1) * sqrt(P0 * P1) / S`
//!
//! `R0 * R1` is the pool invariant: shifting it inside one transaction costs
//! the attacker AMM slippage, while the reserve ratio can be skewed almost for
//! free. Pricing the LP token from `sqrt(K)` and external spot prices gives,
//! by AM-GM, a lower bound on the true pool value that a one-sided trade
//! cannot raise.
//!
//! All inputs must already share one fixed-point scale. The output is on the
//! same scale.

use anchor_lang::prelude::*;

use crate::errors::OracleError;
use crate::math::U256;

pub fn fair_lp_price(
    reserve0: u128,
    reserve1: u128,
    price0: u128,
    price1: u128,
    total_supply: u128,
) -> Result<u128> {
    require!(total_supply > 0, OracleError::ArithmeticOverflow);

    let root_k = U256::full_mul(reserve0, reserve1).isqrt();
    let root_p = U256::full_mul(price0, price1).isqrt();

    let value = U256::full_mul(root_k, root_p)
        .checked_mul_u128(2)
        .ok_or(OracleError::ArithmeticOverflow)?;
    let price = value
        .checked_div(U256::from_u128(total_supply))
        .ok_or(OracleError::ArithmeticOverflow)?;
    let price = u128::try_from(price).map_err(|_| error!(OracleError::ArithmeticOverflow))?;

    require!(price > 0, OracleError::PriceUnderflow);
    Ok(price)
}
