//! Reference prices read from `PriceFeed` accounts.

use anchor_lang::prelude::*;

use crate::engine::{ReferencePrice, ReferencePriceSource};
use crate::errors::OracleError;
use crate::state::PriceFeed;

pub struct FeedAccounts<'a, 'info> {
    feeds: &'a [AccountInfo<'info>],
}

impl<'a, 'info> FeedAccounts<'a, 'info> {
    pub fn new(feeds: &'a [AccountInfo<'info>]) -> Self {
        Self { feeds }
    }
}

impl ReferencePriceSource for FeedAccounts<'_, '_> {
    fn price(&self, source: &Pubkey) -> Result<ReferencePrice> {
        let info = self
            .feeds
            .iter()
            .find(|info| info.key == source)
            .ok_or(OracleError::SourceReadFailure)?;
        require_keys_eq!(*info.owner, crate::ID, OracleError::SourceReadFailure);

        let data = info
            .try_borrow_data()
            .map_err(|_| error!(OracleError::SourceReadFailure))?;
        let mut slice: &[u8] = &data;
        let feed = PriceFeed::try_deserialize(&mut slice)
            .map_err(|_| error!(OracleError::SourceReadFailure))?;

        Ok(ReferencePrice {
            value: feed.price,
            decimals: feed.decimals,
            published_at: feed.published_at,
        })
    }
}
