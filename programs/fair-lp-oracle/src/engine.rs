//! Fair price computation over abstract collaborators.
//!
//! The instructions plug account-backed implementations of these traits in;
//! anything else (an off-chain keeper, the tests) can plug in its own.

use anchor_lang::prelude::*;

use crate::errors::OracleError;
use crate::math::normalize;
use crate::pricing::fair_lp_price;

/// A pool's reserves and LP supply observed at one instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReserveSnapshot {
    /// LP mint of the pool
    pub pool: Pubkey,
    pub asset0: Pubkey,
    pub asset1: Pubkey,
    pub reserve0: u64,
    pub reserve1: u64,
    pub decimals0: u8,
    pub decimals1: u8,
    pub total_supply: u64,
    pub supply_decimals: u8,
}

/// One reading from a reference price source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReferencePrice {
    pub value: i64,
    pub decimals: u8,
    pub published_at: i64,
}

/// Last successful computation for a pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FairPriceRecord {
    pub pool: Pubkey,
    /// Fair LP token price, 18 decimals
    pub price: u128,
    pub computed_at: i64,
    pub slot: u64,
    /// Number of successful computations for this pool, starting at 1
    pub sequence: u64,
}

pub trait ReserveSnapshotReader {
    /// Fails with `ReserveReadFailure` when no consistent snapshot exists.
    fn read_snapshot(&self) -> Result<ReserveSnapshot>;
}

pub trait SourceRegistry {
    /// Fails with `SourceNotRegistered` when `asset` has no entry.
    fn lookup(&self, asset: &Pubkey) -> Result<Pubkey>;
}

pub trait ReferencePriceSource {
    /// Fails with `SourceReadFailure` when `source` cannot be read.
    fn price(&self, source: &Pubkey) -> Result<ReferencePrice>;
}

pub trait PriceCache {
    fn cached(&self, pool: &Pubkey) -> Option<FairPriceRecord>;
    fn store(&mut self, record: FairPriceRecord);
}

/// Reads `source` and returns its price on the 18-decimal scale.
///
/// `max_staleness_secs == 0` accepts readings of any age.
pub fn fetch_reference_price<S: ReferencePriceSource + ?Sized>(
    sources: &S,
    source: &Pubkey,
    max_staleness_secs: i64,
    now: i64,
) -> Result<u128> {
    let reading = sources.price(source)?;
    require!(reading.value > 0, OracleError::InvalidPrice);

    if max_staleness_secs > 0 {
        let age = now.saturating_sub(reading.published_at);
        require!(age <= max_staleness_secs, OracleError::StalePrice);
    }

    normalize(reading.value as u128, reading.decimals).ok_or_else(|| error!(OracleError::ArithmeticOverflow))
}

/// Computes the fair LP price for the pool behind `reader` without touching
/// any cache. Returns the pool key with the price.
pub fn evaluate<R, G, S>(
    reader: &R,
    registry: &G,
    sources: &S,
    max_staleness_secs: i64,
    now: i64,
) -> Result<(Pubkey, u128)>
where
    R: ReserveSnapshotReader + ?Sized,
    G: SourceRegistry + ?Sized,
    S: ReferencePriceSource + ?Sized,
{
    let snapshot = reader.read_snapshot()?;

    let source0 = registry.lookup(&snapshot.asset0)?;
    let source1 = registry.lookup(&snapshot.asset1)?;

    let price0 = fetch_reference_price(sources, &source0, max_staleness_secs, now)?;
    let price1 = fetch_reference_price(sources, &source1, max_staleness_secs, now)?;

    let reserve0 = normalize(snapshot.reserve0 as u128, snapshot.decimals0)
        .ok_or(OracleError::ArithmeticOverflow)?;
    let reserve1 = normalize(snapshot.reserve1 as u128, snapshot.decimals1)
        .ok_or(OracleError::ArithmeticOverflow)?;
    let supply = normalize(snapshot.total_supply as u128, snapshot.supply_decimals)
        .ok_or(OracleError::ArithmeticOverflow)?;

    let price = fair_lp_price(reserve0, reserve1, price0, price1, supply)?;
    Ok((snapshot.pool, price))
}

/// Computes the fair price and, only once every step has succeeded, replaces
/// the pool's cached record.
pub fn compute_and_cache<C, R, G, S>(
    cache: &mut C,
    reader: &R,
    registry: &G,
    sources: &S,
    max_staleness_secs: i64,
    clock: &Clock,
) -> Result<FairPriceRecord>
where
    C: PriceCache + ?Sized,
    R: ReserveSnapshotReader + ?Sized,
    G: SourceRegistry + ?Sized,
    S: ReferencePriceSource + ?Sized,
{
    let (pool, price) = evaluate(reader, registry, sources, max_staleness_secs, clock.unix_timestamp)?;

    let sequence = cache
        .cached(&pool)
        .map_or(0, |previous| previous.sequence)
        .saturating_add(1);
    let record = FairPriceRecord {
        pool,
        price,
        computed_at: clock.unix_timestamp,
        slot: clock.slot,
        sequence,
    };
    cache.store(record);

    Ok(record)
}

pub fn read_cached<C: PriceCache + ?Sized>(cache: &C, pool: &Pubkey) -> Result<FairPriceRecord> {
    cache.cached(pool).ok_or_else(|| error!(OracleError::NoCachedPrice))
}
