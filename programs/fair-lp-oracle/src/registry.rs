//! Price source lookups backed by `PriceSource` accounts.

use anchor_lang::prelude::*;

use crate::engine::SourceRegistry;
use crate::errors::OracleError;
use crate::state::PriceSource;

/// Registry entries supplied to an instruction. Entries may be
/// uninitialized; that is how an unregistered asset shows up on chain.
pub struct AccountRegistry<'a, 'info> {
    entries: &'a [AccountInfo<'info>],
}

impl<'a, 'info> AccountRegistry<'a, 'info> {
    pub fn new(entries: &'a [AccountInfo<'info>]) -> Self {
        Self { entries }
    }
}

fn load_entry(info: &AccountInfo) -> Result<Option<PriceSource>> {
    if *info.owner != crate::ID || info.data_is_empty() {
        return Ok(None);
    }
    let data = info.try_borrow_data()?;
    let mut slice: &[u8] = &data;
    Ok(Some(PriceSource::try_deserialize(&mut slice)?))
}

impl SourceRegistry for AccountRegistry<'_, '_> {
    fn lookup(&self, asset: &Pubkey) -> Result<Pubkey> {
        let (address, _) = PriceSource::address(asset);
        let info = self
            .entries
            .iter()
            .find(|info| *info.key == address)
            .ok_or(OracleError::RegistryAccountMismatch)?;

        match load_entry(info)? {
            Some(entry) if entry.is_registered() && entry.asset == *asset => Ok(entry.source),
            _ => err!(OracleError::SourceNotRegistered),
        }
    }
}
