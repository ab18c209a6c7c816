//! Helpers shared by the unit tests.

use anchor_lang::prelude::*;
use anchor_spl::token::spl_token;
use solana_program::program_option::COption;
use solana_program::program_pack::Pack;

pub fn error_name(err: anchor_lang::error::Error) -> String {
    match err {
        anchor_lang::error::Error::AnchorError(e) => e.error_name.clone(),
        anchor_lang::error::Error::ProgramError(e) => format!("{:?}", e.program_error),
    }
}

/// Owns the backing storage of an `AccountInfo`.
pub struct TestAccount {
    pub key: Pubkey,
    pub owner: Pubkey,
    pub lamports: u64,
    pub data: Vec<u8>,
}

impl TestAccount {
    pub fn empty(key: Pubkey) -> Self {
        Self::with_data(key, Pubkey::default(), Vec::new())
    }

    pub fn with_data(key: Pubkey, owner: Pubkey, data: Vec<u8>) -> Self {
        Self {
            key,
            owner,
            lamports: 1_000_000,
            data,
        }
    }

    pub fn with_account<T: AccountSerialize>(key: Pubkey, owner: Pubkey, account: &T) -> Self {
        let mut data = Vec::new();
        account.try_serialize(&mut data).unwrap();
        Self::with_data(key, owner, data)
    }

    /// Initialized SPL mint.
    pub fn mint(key: Pubkey, authority: Pubkey, supply: u64, decimals: u8) -> Self {
        let mint = spl_token::state::Mint {
            mint_authority: COption::Some(authority),
            supply,
            decimals,
            is_initialized: true,
            freeze_authority: COption::None,
        };
        let mut data = vec![0u8; spl_token::state::Mint::LEN];
        spl_token::state::Mint::pack(mint, &mut data).unwrap();
        Self::with_data(key, spl_token::ID, data)
    }

    /// Initialized SPL token account at a fresh address.
    pub fn token(mint: Pubkey, owner: Pubkey, amount: u64) -> Self {
        let account = spl_token::state::Account {
            mint,
            owner,
            amount,
            delegate: COption::None,
            state: spl_token::state::AccountState::Initialized,
            is_native: COption::None,
            delegated_amount: 0,
            close_authority: COption::None,
        };
        let mut data = vec![0u8; spl_token::state::Account::LEN];
        spl_token::state::Account::pack(account, &mut data).unwrap();
        Self::with_data(Pubkey::new_unique(), spl_token::ID, data)
    }

    pub fn info(&mut self) -> AccountInfo<'_> {
        AccountInfo::new(
            &self.key,
            false,
            false,
            &mut self.lamports,
            &mut self.data,
            &self.owner,
            false,
            0,
        )
    }
}
