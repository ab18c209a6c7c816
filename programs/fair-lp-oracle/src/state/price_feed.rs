use anchor_lang::prelude::*;

use crate::errors::OracleError;

/// Push-style reference price feed written by a single updater
#[account]
pub struct PriceFeed {
    /// Key allowed to publish prices
    pub authority: Pubkey,
    /// Feed label (e.g., "SOL/USD")
    pub label: [u8; 16],
    /// Price decimals
    pub decimals: u8,
    /// Latest published price
    pub price: i64,
    /// Cluster timestamp of the latest publish
    pub published_at: i64,
    /// Slot of the latest publish
    pub published_slot: u64,
    /// Updater-supplied timestamp, informational only
    pub client_ts_ms: i64,
    /// PDA bump
    pub bump: u8,
}

impl PriceFeed {
    pub const SIZE: usize = 32 + 16 + 1 + 8 + 8 + 8 + 8 + 1;
    pub const SEED: &'static [u8] = b"price_feed";
    pub const MAX_DECIMALS: u8 = 18;

    pub fn encode_label(label: &str) -> Result<[u8; 16]> {
        require!(label.len() <= 16, OracleError::LabelTooLong);
        Ok(Self::padded_label(label))
    }

    /// Zero-padded label bytes, truncated to 16; used as a PDA seed.
    pub fn padded_label(label: &str) -> [u8; 16] {
        let len = label.len().min(16);
        let mut bytes = [0u8; 16];
        bytes[..len].copy_from_slice(&label.as_bytes()[..len]);
        bytes
    }

    pub fn label_as_string(&self) -> String {
        String::from_utf8_lossy(
            &self.label[..self.label.iter().position(|&b| b == 0).unwrap_or(16)]
        ).to_string()
    }

    pub fn publish(&mut self, price: i64, client_ts_ms: i64, now: i64, slot: u64) -> Result<()> {
        require!(price > 0, OracleError::InvalidPrice);
        self.price = price;
        self.client_ts_ms = client_ts_ms;
        self.published_at = now;
        self.published_slot = slot;
        Ok(())
    }
}
