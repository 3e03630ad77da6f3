/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

use std::collections::HashMap;

use teller_core::prelude::*;
use tracing::{debug, info, warn};

use crate::config::BankConfig;
use crate::messages::{
    Balance, BankMessage, CancelWithdrawal, GetBalance, PinIncorrect, PinVerified, VerifyPin,
    Withdraw, WithdrawDenied, WithdrawOk, WithdrawalProcessed,
};

#[derive(Debug, Clone)]
struct Account {
    pin: String,
    balance: u32,
    // approved but not yet processed or cancelled
    reserved: u32,
}

/// The bank actor: verifies PINs, approves withdrawals and reports balances.
///
/// Answers go to the `reply_to` sender embedded in each request. An approved
/// withdrawal is deducted immediately and held as a reservation until the controller
/// reports it processed or cancelled; a cancellation gives the reserved amount back.
#[derive(Debug)]
pub struct BankMachine {
    incoming: Receiver<BankMessage>,
    accounts: HashMap<String, Account>,
}

impl Default for BankMachine {
    fn default() -> Self {
        Self::from_config(&BankConfig::default())
    }
}

impl BankMachine {
    /// Creates a bank with no accounts.
    pub fn new() -> Self {
        Self {
            incoming: Receiver::new(),
            accounts: HashMap::new(),
        }
    }

    /// Creates a bank holding the configured accounts.
    pub fn from_config(config: &BankConfig) -> Self {
        config
            .accounts
            .iter()
            .fold(Self::new(), |bank, account| {
                bank.with_account(&account.id, &account.pin, account.balance)
            })
    }

    /// Adds (or replaces) an account.
    #[must_use]
    pub fn with_account(mut self, id: &str, pin: &str, balance: u32) -> Self {
        self.accounts.insert(
            id.to_string(),
            Account {
                pin: pin.to_string(),
                balance,
                reserved: 0,
            },
        );
        self
    }

    /// Available balance of `account`, or `None` if the bank does not know it.
    pub fn balance(&self, account: &str) -> Option<u32> {
        self.accounts.get(account).map(|account| account.balance)
    }

    /// Asks the bank to stop once it next reads its mailbox.
    pub fn done(&self) {
        self.incoming.sender().close();
    }

    fn verify_pin(&mut self, request: VerifyPin) {
        let verified = self
            .accounts
            .get(&request.account)
            .is_some_and(|account| account.pin == request.pin);
        debug!(account = %request.account, verified, "PIN verification");
        if verified {
            request.reply_to.send(PinVerified::new());
        } else {
            request.reply_to.send(PinIncorrect::new());
        }
    }

    fn withdraw(&mut self, request: Withdraw) {
        let approved = match self.accounts.get_mut(&request.account) {
            Some(account) if account.balance >= request.amount => {
                account.balance -= request.amount;
                account.reserved += request.amount;
                true
            }
            Some(_) => false,
            None => {
                warn!(account = %request.account, "withdrawal for unknown account");
                false
            }
        };
        debug!(account = %request.account, amount = request.amount, approved, "withdrawal request");
        if approved {
            request.reply_to.send(WithdrawOk::new());
        } else {
            request.reply_to.send(WithdrawDenied::new());
        }
    }

    fn get_balance(&mut self, request: GetBalance) {
        let amount = self.balance(&request.account).unwrap_or(0);
        request.reply_to.send(Balance::new(amount));
    }

    fn withdrawal_processed(&mut self, notice: WithdrawalProcessed) {
        if let Some(account) = self.accounts.get_mut(&notice.account) {
            account.reserved = account.reserved.saturating_sub(notice.amount);
        }
        info!(account = %notice.account, amount = notice.amount, "withdrawal processed");
    }

    fn cancel_withdrawal(&mut self, notice: CancelWithdrawal) {
        let Some(account) = self.accounts.get_mut(&notice.account) else {
            return;
        };
        let refund = notice.amount.min(account.reserved);
        account.reserved -= refund;
        account.balance = account.balance.saturating_add(refund);
        info!(account = %notice.account, refund, "withdrawal cancelled");
    }
}

impl Actor for BankMachine {
    type Message = BankMessage;

    fn name(&self) -> &str {
        "bank"
    }

    fn sender(&self) -> Sender<BankMessage> {
        self.incoming.sender()
    }

    fn step(&mut self) -> Flow {
        self.incoming
            .wait::<Self>()
            .handle(|bank, request: VerifyPin| bank.verify_pin(request))
            .handle(|bank, request: Withdraw| bank.withdraw(request))
            .handle(|bank, request: GetBalance| bank.get_balance(request))
            .handle(|bank, notice: WithdrawalProcessed| bank.withdrawal_processed(notice))
            .handle(|bank, notice: CancelWithdrawal| bank.cancel_withdrawal(notice))
            .run(self)
    }
}
