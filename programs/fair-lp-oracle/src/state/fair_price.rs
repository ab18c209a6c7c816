use anchor_lang::prelude::*;

use crate::engine::{FairPriceRecord, PriceCache};

/// Last computed fair price for one pool (one per LP mint)
#[account]
pub struct FairPrice {
    /// LP mint of the pool
    pub pool: Pubkey,
    /// Fair LP token price, 18 decimals
    pub price: u128,
    /// Timestamp of the computation
    pub computed_at: i64,
    /// Slot of the computation
    pub slot: u64,
    /// Successful computations so far (0 = never computed)
    pub sequence: u64,
    /// PDA bump
    pub bump: u8,
}

impl FairPrice {
    pub const SIZE: usize = 32 + 16 + 8 + 8 + 8 + 1;
    pub const SEED: &'static [u8] = b"fair_price";

    pub fn address(pool: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[Self::SEED, pool.as_ref()], &crate::ID)
    }

    /// Decodes a cache slot that may not have been created yet.
    pub fn load(info: &AccountInfo) -> Result<Option<FairPrice>> {
        if *info.owner != crate::ID || info.data_is_empty() {
            return Ok(None);
        }
        let data = info.try_borrow_data()?;
        let mut slice: &[u8] = &data;
        Ok(Some(FairPrice::try_deserialize(&mut slice)?))
    }
}

impl PriceCache for FairPrice {
    fn cached(&self, pool: &Pubkey) -> Option<FairPriceRecord> {
        if self.sequence == 0 || self.pool != *pool {
            return None;
        }
        Some(FairPriceRecord {
            pool: self.pool,
            price: self.price,
            computed_at: self.computed_at,
            slot: self.slot,
            sequence: self.sequence,
        })
    }

    fn store(&mut self, record: FairPriceRecord) {
        self.pool = record.pool;
        self.price = record.price;
        self.computed_at = record.computed_at;
        self.slot = record.slot;
        self.sequence = record.sequence;
    }
}
