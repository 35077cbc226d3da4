//! Fire-and-forget transfer dispatch.
//!
//! Accepting a donation spawns a background task and moves on; the
//! overlay reports "request submitted", never "transfer confirmed".
//! Each task is parked in a [`PendingTransfer`] entity so its outcome
//! can be logged when it resolves, then discarded. Outcomes never feed
//! back into the overlay.

use bevy::prelude::*;
use bevy::tasks::futures_lite::future;
use bevy::tasks::{IoTaskPool, Task};

use crate::GameSet;
use crate::wallet::{TransferReceipt, Wallet, WalletError};

/// A dispatched transfer whose outcome has not been observed yet.
#[derive(Component)]
pub struct PendingTransfer {
    pub address: String,
    pub amount: f64,
    task: Task<Result<TransferReceipt, WalletError>>,
}

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Update, poll_transfers.in_set(GameSet::Logic));
}

/// Hands `amount` to the wallet on a background task and returns
/// immediately.
pub fn queue_transfer(commands: &mut Commands, wallet: &Wallet, address: String, amount: f64) {
    let task_wallet = wallet.clone();
    let task_address = address.clone();
    let task = IoTaskPool::get().spawn(async move { task_wallet.send(&task_address, amount) });

    info!("donating {amount} to {address}");
    commands.spawn((
        Name::new("Pending Transfer"),
        PendingTransfer {
            address,
            amount,
            task,
        },
    ));
}

/// Logs and discards transfers whose task has resolved. Runs in every
/// state; a transfer may outlive the overlay that dispatched it.
fn poll_transfers(mut commands: Commands, mut transfers: Query<(Entity, &mut PendingTransfer)>) {
    for (entity, mut transfer) in &mut transfers {
        let Some(outcome) = future::block_on(future::poll_once(&mut transfer.task)) else {
            continue;
        };

        match outcome {
            Ok(receipt) => info!(
                "transfer of {} to {} confirmed ({})",
                transfer.amount, transfer.address, receipt.tx_id
            ),
            Err(error) => warn!(
                "transfer of {} to {} failed: {error}",
                transfer.amount, transfer.address
            ),
        }
        commands.entity(entity).despawn();
    }
}

#[cfg(test)]
mod integration_tests {
    use std::sync::Mutex;
    use std::sync::mpsc::{Receiver, sync_channel};
    use std::time::Duration;

    use bevy::ecs::system::RunSystemOnce;

    use super::*;
    use crate::testing::assert_entity_count;
    use crate::wallet::WalletTransfer;
    use pretty_assertions::assert_eq;

    /// Wallet that blocks each transfer until the test sends an outcome.
    struct GatedWallet {
        gate: Mutex<Receiver<Result<TransferReceipt, WalletError>>>,
    }

    impl WalletTransfer for GatedWallet {
        fn send(&self, _address: &str, _amount: f64) -> Result<TransferReceipt, WalletError> {
            let gate = self.gate.lock().unwrap();
            // A dropped sender means the test is done with this transfer.
            gate.recv().unwrap_or(Err(WalletError::Unavailable))
        }
    }

    struct RefusingWallet;

    impl WalletTransfer for RefusingWallet {
        fn send(&self, _address: &str, _amount: f64) -> Result<TransferReceipt, WalletError> {
            Err(WalletError::Rejected("insufficient funds".to_string()))
        }
    }

    fn queue_test_transfer(app: &mut App, address: &str, amount: f64) {
        let address = address.to_string();
        app.world_mut()
            .run_system_once(move |mut commands: Commands, wallet: Res<Wallet>| {
                queue_transfer(&mut commands, &wallet, address.clone(), amount);
            })
            .unwrap();
    }

    /// Spins updates until no transfer is pending (bounded).
    fn wait_for_resolution(app: &mut App) {
        for _ in 0..100 {
            app.update();
            let mut query = app.world_mut().query::<&PendingTransfer>();
            if query.iter(app.world()).count() == 0 {
                return;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        panic!("transfer task never resolved");
    }

    #[test]
    fn queue_parks_a_pending_transfer() {
        let (_tx, rx) = sync_channel(1);
        let mut app = crate::testing::create_base_test_app();
        app.insert_resource(Wallet::new(GatedWallet {
            gate: Mutex::new(rx),
        }));
        app.add_systems(Update, poll_transfers);

        queue_test_transfer(&mut app, "0xabc", 25.5);
        app.update();
        app.update();

        // Task is still blocked on the gate, so the entity stays parked.
        let mut query = app.world_mut().query::<&PendingTransfer>();
        let pending = query.single(app.world()).unwrap();
        assert_eq!(pending.address, "0xabc");
        assert_eq!(pending.amount, 25.5);
    }

    #[test]
    fn confirmed_transfer_is_discarded() {
        let (tx, rx) = sync_channel(1);
        let mut app = crate::testing::create_base_test_app();
        app.insert_resource(Wallet::new(GatedWallet {
            gate: Mutex::new(rx),
        }));
        app.add_systems(Update, poll_transfers);

        queue_test_transfer(&mut app, "0xabc", 10.0);
        tx.send(Ok(TransferReceipt {
            tx_id: "0xt".to_string(),
        }))
        .unwrap();

        wait_for_resolution(&mut app);
        assert_entity_count::<With<PendingTransfer>>(&mut app, 0);
    }

    #[test]
    fn rejected_transfer_is_discarded_quietly() {
        let mut app = crate::testing::create_base_test_app();
        app.insert_resource(Wallet::new(RefusingWallet));
        app.add_systems(Update, poll_transfers);

        queue_test_transfer(&mut app, "0xabc", 10.0);
        wait_for_resolution(&mut app);

        assert_entity_count::<With<PendingTransfer>>(&mut app, 0);
        // The failure is logged, not surfaced: the overlay state is untouched.
        assert_eq!(
            *app.world()
                .resource::<State<crate::donation::DonationOverlay>>()
                .get(),
            crate::donation::DonationOverlay::Closed
        );
    }
}
