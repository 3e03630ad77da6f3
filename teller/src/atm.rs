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

use teller_core::prelude::*;
use tracing::{debug, trace, warn};

use crate::messages::{
    AtmMessage, Balance, BalancePressed, BankMessage, CancelPressed, CancelWithdrawal,
    CardInserted, ClearLastPressed, DigitPressed, DisplayBalance, DisplayEnterCard,
    DisplayEnterPin, DisplayInsufficientFunds, DisplayPinIncorrectMessage,
    DisplayWithdrawalCancelled, DisplayWithdrawalOptions, EjectCard, GetBalance,
    InterfaceMessage, IssueMoney, PinIncorrect, PinVerified, VerifyPin, Withdraw,
    WithdrawDenied, WithdrawOk, WithdrawPressed, WithdrawalProcessed,
};

/// Number of digits that completes a PIN unless overridden.
pub const DEFAULT_PIN_LENGTH: usize = 4;

/// The states of the ATM conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtmState {
    /// Idle, waiting for a card. The initial state.
    WaitingForCard,
    /// Collecting PIN digits.
    GettingPin,
    /// Waiting for the bank to accept or reject the PIN.
    VerifyingPin,
    /// Showing the menu and waiting for a choice.
    WaitForAction,
    /// Waiting for the bank to approve a withdrawal.
    ProcessWithdrawal,
    /// Waiting for the bank to report the balance.
    ProcessBalance,
    /// Ending the conversation; ejects the card without waiting for input.
    DoneProcessing,
}

/// The ATM controller: an actor whose behaviour is a state machine over [`AtmState`].
///
/// Each [`step`](Actor::step) runs the function of the current state once. Every state
/// function except `done_processing` builds one dispatcher over the controller's own
/// mailbox that binds only the messages meaningful in that state; anything else is
/// discarded, and `Close` ends the run loop from any state.
///
/// Requests to the bank embed the controller's own [`Sender`] as `reply_to`, so the
/// bank's answer lands in this mailbox and is picked up by the next state's dispatcher.
#[derive(Debug)]
pub struct AtmController {
    incoming: Receiver<AtmMessage>,
    bank: Sender<BankMessage>,
    interface: Sender<InterfaceMessage>,
    state: AtmState,
    pin_length: usize,
    account: String,
    pin: String,
    withdrawal_amount: u32,
}

impl AtmController {
    /// Creates a controller in [`AtmState::WaitingForCard`] that talks to the given bank
    /// and hardware interface.
    pub fn new(bank: Sender<BankMessage>, interface: Sender<InterfaceMessage>) -> Self {
        Self {
            incoming: Receiver::new(),
            bank,
            interface,
            state: AtmState::WaitingForCard,
            pin_length: DEFAULT_PIN_LENGTH,
            account: String::new(),
            pin: String::new(),
            withdrawal_amount: 0,
        }
    }

    /// Sets how many digits complete a PIN (at least one).
    #[must_use]
    pub fn with_pin_length(mut self, pin_length: usize) -> Self {
        self.pin_length = pin_length.max(1);
        self
    }

    /// The current state.
    pub const fn state(&self) -> AtmState {
        self.state
    }

    /// Account of the current conversation, empty when idle.
    pub fn account(&self) -> &str {
        &self.account
    }

    /// Digits entered so far.
    pub fn pin(&self) -> &str {
        &self.pin
    }

    /// Amount of the pending withdrawal, zero when none.
    pub const fn withdrawal_amount(&self) -> u32 {
        self.withdrawal_amount
    }

    /// Asks the controller to stop once it next reads its mailbox.
    pub fn done(&self) {
        self.incoming.sender().close();
    }

    fn transition(&mut self, next: AtmState) {
        debug!(from = ?self.state, to = ?next, "state transition");
        self.state = next;
    }

    fn reset_conversation(&mut self) {
        self.account.clear();
        self.pin.clear();
        self.withdrawal_amount = 0;
    }

    fn waiting_for_card(&mut self) -> Flow {
        self.interface.send(DisplayEnterCard::new());
        self.incoming
            .wait::<Self>()
            .handle(|atm, card: CardInserted| {
                atm.account = card.account;
                atm.pin.clear();
                atm.interface.send(DisplayEnterPin::new());
                atm.transition(AtmState::GettingPin);
            })
            .run(self)
    }

    fn getting_pin(&mut self) -> Flow {
        self.incoming
            .wait::<Self>()
            .handle(|atm, pressed: DigitPressed| atm.push_digit(pressed.digit))
            .handle(|atm, _: ClearLastPressed| {
                atm.pin.pop();
            })
            .handle(|atm, _: CancelPressed| atm.transition(AtmState::DoneProcessing))
            .run(self)
    }

    fn push_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            warn!(?digit, "ignoring non-digit key");
            return;
        }
        if self.pin.len() >= self.pin_length {
            trace!(?digit, "PIN already complete, ignoring digit");
            return;
        }
        self.pin.push(digit);
        if self.pin.len() == self.pin_length {
            debug!(account = %self.account, "PIN complete, asking bank to verify");
            self.bank.send(VerifyPin::new(
                self.account.clone(),
                self.pin.clone(),
                self.incoming.sender(),
            ));
            self.transition(AtmState::VerifyingPin);
        }
    }

    fn verifying_pin(&mut self) -> Flow {
        self.incoming
            .wait::<Self>()
            .handle(|atm, _: PinVerified| atm.transition(AtmState::WaitForAction))
            .handle(|atm, _: PinIncorrect| {
                atm.interface.send(DisplayPinIncorrectMessage::new());
                atm.transition(AtmState::DoneProcessing);
            })
            .handle(|atm, _: CancelPressed| atm.transition(AtmState::DoneProcessing))
            .run(self)
    }

    fn wait_for_action(&mut self) -> Flow {
        self.interface.send(DisplayWithdrawalOptions::new());
        self.incoming
            .wait::<Self>()
            .handle(|atm, pressed: WithdrawPressed| {
                atm.withdrawal_amount = pressed.amount;
                atm.bank.send(Withdraw::new(
                    atm.account.clone(),
                    pressed.amount,
                    atm.incoming.sender(),
                ));
                atm.transition(AtmState::ProcessWithdrawal);
            })
            .handle(|atm, _: BalancePressed| {
                atm.bank
                    .send(GetBalance::new(atm.account.clone(), atm.incoming.sender()));
                atm.transition(AtmState::ProcessBalance);
            })
            .handle(|atm, _: CancelPressed| atm.transition(AtmState::DoneProcessing))
            .run(self)
    }

    fn process_withdrawal(&mut self) -> Flow {
        self.incoming
            .wait::<Self>()
            .handle(|atm, _: WithdrawOk| {
                atm.interface.send(IssueMoney::new(atm.withdrawal_amount));
                atm.bank.send(WithdrawalProcessed::new(
                    atm.account.clone(),
                    atm.withdrawal_amount,
                ));
                atm.transition(AtmState::DoneProcessing);
            })
            .handle(|atm, _: WithdrawDenied| {
                atm.interface.send(DisplayInsufficientFunds::new());
                atm.transition(AtmState::DoneProcessing);
            })
            .handle(|atm, _: CancelPressed| {
                atm.bank.send(CancelWithdrawal::new(
                    atm.account.clone(),
                    atm.withdrawal_amount,
                ));
                atm.interface.send(DisplayWithdrawalCancelled::new());
                atm.transition(AtmState::DoneProcessing);
            })
            .run(self)
    }

    fn process_balance(&mut self) -> Flow {
        self.incoming
            .wait::<Self>()
            .handle(|atm, balance: Balance| {
                atm.interface.send(DisplayBalance::new(balance.amount));
                atm.transition(AtmState::WaitForAction);
            })
            .handle(|atm, _: CancelPressed| atm.transition(AtmState::DoneProcessing))
            .run(self)
    }

    fn done_processing(&mut self) -> Flow {
        self.interface.send(EjectCard::new());
        self.reset_conversation();
        self.transition(AtmState::WaitingForCard);
        Flow::Handled
    }
}

impl Actor for AtmController {
    type Message = AtmMessage;

    fn name(&self) -> &str {
        "atm"
    }

    fn sender(&self) -> Sender<AtmMessage> {
        self.incoming.sender()
    }

    fn step(&mut self) -> Flow {
        match self.state {
            AtmState::WaitingForCard => self.waiting_for_card(),
            AtmState::GettingPin => self.getting_pin(),
            AtmState::VerifyingPin => self.verifying_pin(),
            AtmState::WaitForAction => self.wait_for_action(),
            AtmState::ProcessWithdrawal => self.process_withdrawal(),
            AtmState::ProcessBalance => self.process_balance(),
            AtmState::DoneProcessing => self.done_processing(),
        }
    }
}
