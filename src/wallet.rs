//! Wallet seam for outgoing MANA transfers.
//!
//! The donation flow only ever talks to the [`Wallet`] resource, so scenes
//! and tests can swap the provider without touching the UI systems. The
//! default [`DryRunWallet`] acknowledges transfers without reaching a chain.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use bevy::prelude::*;
use thiserror::Error;

/// Acknowledgement returned by a completed transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReceipt {
    /// Provider-assigned transaction identifier.
    pub tx_id: String,
}

/// Why a transfer did not go through.
#[derive(Debug, Error)]
pub enum WalletError {
    /// The provider refused the transfer (malformed address, insufficient
    /// funds, or the user declined to sign).
    #[error("transfer rejected: {0}")]
    Rejected(String),
    /// No provider is reachable.
    #[error("wallet provider unavailable")]
    Unavailable,
}

/// Provider backing for outgoing transfers.
///
/// `send` runs on a background task and may block until the provider
/// acknowledges or rejects, hence the `Send + Sync` bound.
pub trait WalletTransfer: Send + Sync + 'static {
    fn send(&self, address: &str, amount: f64) -> Result<TransferReceipt, WalletError>;
}

/// Shared handle to the active wallet provider.
///
/// Insert before [`plugin`] runs to use a custom provider; otherwise a
/// [`DryRunWallet`] is installed.
#[derive(Resource, Clone)]
pub struct Wallet(Arc<dyn WalletTransfer>);

impl Wallet {
    pub fn new(provider: impl WalletTransfer) -> Self {
        Self(Arc::new(provider))
    }

    pub fn send(&self, address: &str, amount: f64) -> Result<TransferReceipt, WalletError> {
        self.0.send(address, amount)
    }
}

/// Default provider: acknowledges every transfer with a sequential
/// receipt and never touches a chain.
#[derive(Debug, Default)]
pub struct DryRunWallet {
    sequence: AtomicU64,
}

impl WalletTransfer for DryRunWallet {
    fn send(&self, _address: &str, _amount: f64) -> Result<TransferReceipt, WalletError> {
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed);
        Ok(TransferReceipt {
            tx_id: format!("dry-run-{seq}"),
        })
    }
}

pub fn plugin(app: &mut App) {
    if !app.world().contains_resource::<Wallet>() {
        app.insert_resource(Wallet::new(DryRunWallet::default()));
    }
}
