//! Reserve snapshots of constant-product pools that keep their reserves in
//! SPL token vaults.
//!
//! Vaults are only trusted when a `PoolVaults` binding registered by the
//! oracle authority names them for the LP mint. Anyone can open a token
//! account owned by a pool's authority, so ownership alone proves nothing.
//! The pool authority must still own both vaults and be the LP mint's mint
//! authority.

use anchor_lang::prelude::*;
use solana_program::program_option::COption;
use anchor_spl::token::{Mint, TokenAccount};

use crate::engine::{ReserveSnapshot, ReserveSnapshotReader};
use crate::errors::OracleError;
use crate::state::PoolVaults;

pub struct TokenPoolReader<'a, 'info> {
    pub pool_vaults: &'a AccountInfo<'info>,
    pub lp_mint: &'a AccountInfo<'info>,
    pub vault0: &'a AccountInfo<'info>,
    pub vault1: &'a AccountInfo<'info>,
    pub mint0: &'a AccountInfo<'info>,
    pub mint1: &'a AccountInfo<'info>,
}

fn unpack<T: AccountDeserialize>(info: &AccountInfo) -> Result<T> {
    require_keys_eq!(*info.owner, anchor_spl::token::ID, OracleError::ReserveReadFailure);
    let data = info
        .try_borrow_data()
        .map_err(|_| error!(OracleError::ReserveReadFailure))?;
    let mut slice: &[u8] = &data;
    T::try_deserialize(&mut slice).map_err(|_| error!(OracleError::ReserveReadFailure))
}

/// Reads the pool's accounts and checks they describe one pool. Does not
/// check the vaults against a binding; `register_pool` uses this before one
/// exists.
pub fn read_pool_accounts(
    lp_mint: &AccountInfo,
    vault0: &AccountInfo,
    vault1: &AccountInfo,
    mint0: &AccountInfo,
    mint1: &AccountInfo,
) -> Result<ReserveSnapshot> {
    let lp = unpack::<Mint>(lp_mint)?;
    let reserves0 = unpack::<TokenAccount>(vault0)?;
    let reserves1 = unpack::<TokenAccount>(vault1)?;
    let asset0 = unpack::<Mint>(mint0)?;
    let asset1 = unpack::<Mint>(mint1)?;

    require_keys_neq!(*mint0.key, *mint1.key, OracleError::ReserveReadFailure);
    require_keys_eq!(reserves0.mint, *mint0.key, OracleError::ReserveReadFailure);
    require_keys_eq!(reserves1.mint, *mint1.key, OracleError::ReserveReadFailure);
    require_keys_eq!(reserves0.owner, reserves1.owner, OracleError::ReserveReadFailure);
    require!(
        lp.mint_authority == COption::Some(reserves0.owner),
        OracleError::ReserveReadFailure
    );

    Ok(ReserveSnapshot {
        pool: *lp_mint.key,
        asset0: *mint0.key,
        asset1: *mint1.key,
        reserve0: reserves0.amount,
        reserve1: reserves1.amount,
        decimals0: asset0.decimals,
        decimals1: asset1.decimals,
        total_supply: lp.supply,
        supply_decimals: lp.decimals,
    })
}

impl ReserveSnapshotReader for TokenPoolReader<'_, '_> {
    fn read_snapshot(&self) -> Result<ReserveSnapshot> {
        let (address, _) = PoolVaults::address(self.lp_mint.key);
        require_keys_eq!(*self.pool_vaults.key, address, OracleError::ReserveReadFailure);
        let binding = PoolVaults::load(self.pool_vaults).ok_or(OracleError::ReserveReadFailure)?;
        require!(
            binding.binds(self.lp_mint.key, self.vault0.key, self.vault1.key),
            OracleError::ReserveReadFailure
        );

        read_pool_accounts(self.lp_mint, self.vault0, self.vault1, self.mint0, self.mint1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{error_name, TestAccount};

    struct Pool {
        authority: Pubkey,
        pool_vaults: TestAccount,
        lp_mint: TestAccount,
        vault0: TestAccount,
        vault1: TestAccount,
        mint0: TestAccount,
        mint1: TestAccount,
    }

    impl Pool {
        fn new() -> Self {
            let authority = Pubkey::new_unique();
            let (lp_mint, mint0, mint1) = (Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique());
            let mut pool = Pool {
                authority,
                pool_vaults: TestAccount::empty(PoolVaults::address(&lp_mint).0),
                lp_mint: TestAccount::mint(lp_mint, authority, 1_000_000_000, 9),
                vault0: TestAccount::token(mint0, authority, 100_000_000_000),
                vault1: TestAccount::token(mint1, authority, 10_000_000_000),
                mint0: TestAccount::mint(mint0, Pubkey::new_unique(), u64::MAX, 9),
                mint1: TestAccount::mint(mint1, Pubkey::new_unique(), u64::MAX, 6),
            };
            pool.bind();
            pool
        }

        /// Registers the current vaults as the pool's vaults.
        fn bind(&mut self) {
            let (address, bump) = PoolVaults::address(&self.lp_mint.key);
            let binding = PoolVaults {
                lp_mint: self.lp_mint.key,
                vault0: self.vault0.key,
                vault1: self.vault1.key,
                updated_at: 0,
                bump,
            };
            self.pool_vaults = TestAccount::with_account(address, crate::ID, &binding);
        }

        fn read(&mut self) -> Result<ReserveSnapshot> {
            let pool_vaults = self.pool_vaults.info();
            let lp_mint = self.lp_mint.info();
            let vault0 = self.vault0.info();
            let vault1 = self.vault1.info();
            let mint0 = self.mint0.info();
            let mint1 = self.mint1.info();
            TokenPoolReader {
                pool_vaults: &pool_vaults,
                lp_mint: &lp_mint,
                vault0: &vault0,
                vault1: &vault1,
                mint0: &mint0,
                mint1: &mint1,
            }
            .read_snapshot()
        }
    }

    #[test]
    fn test_reads_consistent_pool() {
        let mut pool = Pool::new();
        let snapshot = pool.read().unwrap();

        assert_eq!(snapshot.pool, pool.lp_mint.key);
        assert_eq!(snapshot.asset0, pool.mint0.key);
        assert_eq!(snapshot.asset1, pool.mint1.key);
        assert_eq!(snapshot.reserve0, 100_000_000_000);
        assert_eq!(snapshot.reserve1, 10_000_000_000);
        assert_eq!(snapshot.decimals0, 9);
        assert_eq!(snapshot.decimals1, 6);
        assert_eq!(snapshot.total_supply, 1_000_000_000);
        assert_eq!(snapshot.supply_decimals, 9);
    }

    #[test]
    fn test_foreign_vaults_owned_by_pool_authority() {
        let mut pool = Pool::new();
        pool.vault0 = TestAccount::token(pool.mint0.key, pool.authority, 1);
        pool.vault1 = TestAccount::token(pool.mint1.key, pool.authority, 1);

        let err = pool.read().unwrap_err();
        assert_eq!(error_name(err), "ReserveReadFailure");
    }

    #[test]
    fn test_one_foreign_vault() {
        let mut pool = Pool::new();
        pool.vault1 = TestAccount::token(pool.mint1.key, pool.authority, 1);

        let err = pool.read().unwrap_err();
        assert_eq!(error_name(err), "ReserveReadFailure");
    }

    #[test]
    fn test_swapped_vaults() {
        let mut pool = Pool::new();
        std::mem::swap(&mut pool.vault0, &mut pool.vault1);
        std::mem::swap(&mut pool.mint0, &mut pool.mint1);

        let err = pool.read().unwrap_err();
        assert_eq!(error_name(err), "ReserveReadFailure");
    }

    #[test]
    fn test_unregistered_pool() {
        let mut pool = Pool::new();
        pool.pool_vaults = TestAccount::empty(pool.pool_vaults.key);

        let err = pool.read().unwrap_err();
        assert_eq!(error_name(err), "ReserveReadFailure");
    }

    #[test]
    fn test_binding_of_other_pool() {
        let mut other = Pool::new();
        let mut pool = Pool::new();
        // binding data names this pool's vaults but sits at another pool's address
        pool.pool_vaults.key = other.pool_vaults.key;
        assert!(other.read().is_ok());

        let err = pool.read().unwrap_err();
        assert_eq!(error_name(err), "ReserveReadFailure");
    }

    #[test]
    fn test_vault_of_other_mint() {
        let mut pool = Pool::new();
        pool.vault1 = TestAccount::token(Pubkey::new_unique(), pool.authority, 5);
        pool.bind();

        let err = pool.read().unwrap_err();
        assert_eq!(error_name(err), "ReserveReadFailure");
    }

    #[test]
    fn test_lp_mint_of_other_pool() {
        let mut pool = Pool::new();
        pool.lp_mint = TestAccount::mint(pool.lp_mint.key, Pubkey::new_unique(), 1_000_000_000, 9);

        let err = pool.read().unwrap_err();
        assert_eq!(error_name(err), "ReserveReadFailure");
    }

    #[test]
    fn test_account_not_owned_by_token_program() {
        let mut pool = Pool::new();
        pool.vault0.owner = Pubkey::new_unique();

        let err = pool.read().unwrap_err();
        assert_eq!(error_name(err), "ReserveReadFailure");
    }

    #[test]
    fn test_truncated_account_data() {
        let mut pool = Pool::new();
        pool.lp_mint.data.truncate(40);

        let err = pool.read().unwrap_err();
        assert_eq!(error_name(err), "ReserveReadFailure");
    }
}
