//! In-memory collaborators for driving the pricing engine in tests.

#![allow(dead_code)]

use std::collections::BTreeMap;

use anchor_lang::prelude::*;
use fair_lp_oracle::engine::*;
use fair_lp_oracle::errors::OracleError;

pub fn error_name(err: anchor_lang::error::Error) -> String {
    match err {
        anchor_lang::error::Error::AnchorError(e) => e.error_name.clone(),
        anchor_lang::error::Error::ProgramError(e) => format!("{:?}", e.program_error),
    }
}

/// A pool whose snapshot is fixed, or unreadable when `None`.
pub struct StaticPool(pub Option<ReserveSnapshot>);

impl ReserveSnapshotReader for StaticPool {
    fn read_snapshot(&self) -> Result<ReserveSnapshot> {
        self.0.ok_or_else(|| error!(OracleError::ReserveReadFailure))
    }
}

#[derive(Default)]
pub struct MemoryRegistry(pub BTreeMap<Pubkey, Pubkey>);

impl MemoryRegistry {
    pub fn upsert(&mut self, asset: Pubkey, source: Pubkey) {
        self.0.insert(asset, source);
    }
}

impl SourceRegistry for MemoryRegistry {
    fn lookup(&self, asset: &Pubkey) -> Result<Pubkey> {
        self.0
            .get(asset)
            .copied()
            .ok_or_else(|| error!(OracleError::SourceNotRegistered))
    }
}

#[derive(Default)]
pub struct MemoryFeeds(pub BTreeMap<Pubkey, ReferencePrice>);

impl ReferencePriceSource for MemoryFeeds {
    fn price(&self, source: &Pubkey) -> Result<ReferencePrice> {
        self.0
            .get(source)
            .copied()
            .ok_or_else(|| error!(OracleError::SourceReadFailure))
    }
}

#[derive(Default)]
pub struct MemoryCache(pub BTreeMap<Pubkey, FairPriceRecord>);

impl PriceCache for MemoryCache {
    fn cached(&self, pool: &Pubkey) -> Option<FairPriceRecord> {
        self.0.get(pool).copied()
    }

    fn store(&mut self, record: FairPriceRecord) {
        self.0.insert(record.pool, record);
    }
}

pub const NOW: i64 = 1_700_000_000;

pub fn clock_at(unix_timestamp: i64, slot: u64) -> Clock {
    Clock {
        slot,
        unix_timestamp,
        ..Clock::default()
    }
}

pub fn reading(value: i64, decimals: u8) -> ReferencePrice {
    ReferencePrice {
        value,
        decimals,
        published_at: NOW,
    }
}

/// Everything needed to price one pool.
pub struct Fixture {
    pub pool: StaticPool,
    pub registry: MemoryRegistry,
    pub feeds: MemoryFeeds,
    pub cache: MemoryCache,
    pub source0: Pubkey,
    pub source1: Pubkey,
}

impl Fixture {
    /// Pool with both assets registered and priced, all on the 18-decimal scale.
    pub fn new(reserve0: u64, reserve1: u64, price0: i64, price1: i64, total_supply: u64) -> Self {
        let snapshot = ReserveSnapshot {
            pool: Pubkey::new_unique(),
            asset0: Pubkey::new_unique(),
            asset1: Pubkey::new_unique(),
            reserve0,
            reserve1,
            decimals0: 18,
            decimals1: 18,
            total_supply,
            supply_decimals: 18,
        };
        let (source0, source1) = (Pubkey::new_unique(), Pubkey::new_unique());

        let mut registry = MemoryRegistry::default();
        registry.upsert(snapshot.asset0, source0);
        registry.upsert(snapshot.asset1, source1);

        let mut feeds = MemoryFeeds::default();
        feeds.0.insert(source0, reading(price0, 18));
        feeds.0.insert(source1, reading(price1, 18));

        Self {
            pool: StaticPool(Some(snapshot)),
            registry,
            feeds,
            cache: MemoryCache::default(),
            source0,
            source1,
        }
    }

    pub fn snapshot(&self) -> ReserveSnapshot {
        self.pool.0.expect("fixture pool has a snapshot")
    }

    pub fn pool_key(&self) -> Pubkey {
        self.snapshot().pool
    }

    pub fn compute(&mut self, max_staleness_secs: i64, clock: &Clock) -> Result<FairPriceRecord> {
        compute_and_cache(
            &mut self.cache,
            &self.pool,
            &self.registry,
            &self.feeds,
            max_staleness_secs,
            clock,
        )
    }

    pub fn read(&self) -> Result<FairPriceRecord> {
        read_cached(&self.cache, &self.pool_key())
    }
}
