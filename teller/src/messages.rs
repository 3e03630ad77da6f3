//! The three closed message sets exchanged by the ATM system.
//!
//! *   [`AtmMessage`]: everything the controller accepts, from the keypad and the bank.
//! *   [`BankMessage`]: requests and notifications for the bank. Requests that expect
//!     an answer carry the controller's [`Sender`] as `reply_to`.
//! *   [`InterfaceMessage`]: display, cash and card commands for the hardware
//!     interface. None of them expects a reply.

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
use derive_new::new;
use teller_core::prelude::*;

// --- Controller inbox ---

/// A card for `account` was inserted.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct CardInserted {
    /// Account identifier read from the card.
    pub account: String,
}

/// A keypad digit was pressed while entering the PIN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct DigitPressed {
    /// The key, expected to be `'0'..='9'`.
    pub digit: char,
}

/// The "clear" key was pressed; removes the last PIN digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct ClearLastPressed;

/// The "cancel" key was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct CancelPressed;

/// The customer chose to withdraw `amount`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct WithdrawPressed {
    /// Requested amount in whole currency units.
    pub amount: u32,
}

/// The customer asked for the account balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct BalancePressed;

/// Bank reply: the PIN matches the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct PinVerified;

/// Bank reply: the PIN does not match, or the account is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct PinIncorrect;

/// Bank reply: the withdrawal is approved and the amount reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct WithdrawOk;

/// Bank reply: the balance does not cover the withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct WithdrawDenied;

/// Bank reply to a balance request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct Balance {
    /// Current balance in whole currency units.
    pub amount: u32,
}

/// Messages accepted by the [`AtmController`](crate::AtmController).
#[teller_message]
#[derive(PartialEq, Eq)]
pub enum AtmMessage {
    /// See [`CardInserted`].
    CardInserted(CardInserted),
    /// See [`DigitPressed`].
    DigitPressed(DigitPressed),
    /// See [`ClearLastPressed`].
    ClearLastPressed(ClearLastPressed),
    /// See [`CancelPressed`].
    CancelPressed(CancelPressed),
    /// See [`WithdrawPressed`].
    WithdrawPressed(WithdrawPressed),
    /// See [`BalancePressed`].
    BalancePressed(BalancePressed),
    /// See [`PinVerified`].
    PinVerified(PinVerified),
    /// See [`PinIncorrect`].
    PinIncorrect(PinIncorrect),
    /// See [`WithdrawOk`].
    WithdrawOk(WithdrawOk),
    /// See [`WithdrawDenied`].
    WithdrawDenied(WithdrawDenied),
    /// See [`Balance`].
    Balance(Balance),
}

// --- Bank inbox ---

/// Asks the bank whether `pin` unlocks `account`.
///
/// Answered with [`PinVerified`] or [`PinIncorrect`] on `reply_to`.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct VerifyPin {
    /// Account identifier.
    pub account: String,
    /// The PIN as entered.
    pub pin: String,
    /// Where the answer goes.
    pub reply_to: Sender<AtmMessage>,
}

/// Asks the bank to reserve `amount` from `account`.
///
/// Answered with [`WithdrawOk`] or [`WithdrawDenied`] on `reply_to`.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Withdraw {
    /// Account identifier.
    pub account: String,
    /// Amount to reserve.
    pub amount: u32,
    /// Where the answer goes.
    pub reply_to: Sender<AtmMessage>,
}

/// Asks the bank for the balance of `account`; answered with [`Balance`].
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct GetBalance {
    /// Account identifier.
    pub account: String,
    /// Where the answer goes.
    pub reply_to: Sender<AtmMessage>,
}

/// The cash for an approved withdrawal was issued.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct WithdrawalProcessed {
    /// Account identifier.
    pub account: String,
    /// Amount that left the machine.
    pub amount: u32,
}

/// The customer cancelled after the withdrawal was requested.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct CancelWithdrawal {
    /// Account identifier.
    pub account: String,
    /// Amount that was requested.
    pub amount: u32,
}

/// Messages accepted by the [`BankMachine`](crate::BankMachine).
#[teller_message]
#[derive(PartialEq, Eq)]
pub enum BankMessage {
    /// See [`VerifyPin`].
    VerifyPin(VerifyPin),
    /// See [`Withdraw`].
    Withdraw(Withdraw),
    /// See [`GetBalance`].
    GetBalance(GetBalance),
    /// See [`WithdrawalProcessed`].
    WithdrawalProcessed(WithdrawalProcessed),
    /// See [`CancelWithdrawal`].
    CancelWithdrawal(CancelWithdrawal),
}

// --- Hardware interface inbox ---

/// Dispense `amount` in cash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct IssueMoney {
    /// Amount to dispense.
    pub amount: u32,
}

/// Show the idle prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct DisplayEnterCard;

/// Ask for the PIN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct DisplayEnterPin;

/// Tell the customer the withdrawal was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct DisplayInsufficientFunds;

/// Confirm that the pending withdrawal was cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct DisplayWithdrawalCancelled;

/// Tell the customer the PIN was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct DisplayPinIncorrectMessage;

/// Show the transaction menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct DisplayWithdrawalOptions;

/// Show the account balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct DisplayBalance {
    /// Balance to show.
    pub amount: u32,
}

/// Return the card to the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct EjectCard;

/// Messages accepted by the [`InterfaceMachine`](crate::InterfaceMachine).
#[teller_message]
#[derive(PartialEq, Eq)]
pub enum InterfaceMessage {
    /// See [`IssueMoney`].
    IssueMoney(IssueMoney),
    /// See [`DisplayEnterCard`].
    DisplayEnterCard(DisplayEnterCard),
    /// See [`DisplayEnterPin`].
    DisplayEnterPin(DisplayEnterPin),
    /// See [`DisplayInsufficientFunds`].
    DisplayInsufficientFunds(DisplayInsufficientFunds),
    /// See [`DisplayWithdrawalCancelled`].
    DisplayWithdrawalCancelled(DisplayWithdrawalCancelled),
    /// See [`DisplayPinIncorrectMessage`].
    DisplayPinIncorrectMessage(DisplayPinIncorrectMessage),
    /// See [`DisplayWithdrawalOptions`].
    DisplayWithdrawalOptions(DisplayWithdrawalOptions),
    /// See [`DisplayBalance`].
    DisplayBalance(DisplayBalance),
    /// See [`EjectCard`].
    EjectCard(EjectCard),
}
