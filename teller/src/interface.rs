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

use std::fmt::{self, Debug, Formatter};
use std::io::{self, Write};

use teller_core::prelude::*;
use tracing::{error, trace};

use crate::messages::{
    DisplayBalance, DisplayEnterCard, DisplayEnterPin, DisplayInsufficientFunds,
    DisplayPinIncorrectMessage, DisplayWithdrawalCancelled, DisplayWithdrawalOptions, EjectCard,
    InterfaceMessage, IssueMoney,
};

/// The hardware-interface actor: renders every display, cash and card command as one
/// line of text on its display sink.
pub struct InterfaceMachine {
    incoming: Receiver<InterfaceMessage>,
    display: Box<dyn Write + Send>,
    withdrawal_amount: u32,
}

impl InterfaceMachine {
    /// Creates an interface writing to `display`.
    pub fn new(display: impl Write + Send + 'static) -> Self {
        Self {
            incoming: Receiver::new(),
            display: Box::new(display),
            withdrawal_amount: 50,
        }
    }

    /// Creates an interface writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Sets the amount offered in the withdrawal menu.
    #[must_use]
    pub fn with_withdrawal_amount(mut self, amount: u32) -> Self {
        self.withdrawal_amount = amount;
        self
    }

    /// Asks the interface to stop once it next reads its mailbox.
    pub fn done(&self) {
        self.incoming.sender().close();
    }

    fn show(&mut self, text: &str) {
        trace!(text, "display");
        let written = writeln!(self.display, "{text}").and_then(|()| self.display.flush());
        if let Err(e) = written {
            error!("failed to write to display: {e}");
        }
    }
}

impl Debug for InterfaceMachine {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterfaceMachine")
            .field("incoming", &self.incoming)
            .field("withdrawal_amount", &self.withdrawal_amount)
            .finish_non_exhaustive()
    }
}

impl Actor for InterfaceMachine {
    type Message = InterfaceMessage;

    fn name(&self) -> &str {
        "interface"
    }

    fn sender(&self) -> Sender<InterfaceMessage> {
        self.incoming.sender()
    }

    fn step(&mut self) -> Flow {
        self.incoming
            .wait::<Self>()
            .handle(|ui, command: IssueMoney| ui.show(&format!("Issuing {}", command.amount)))
            .handle(|ui, _: DisplayInsufficientFunds| ui.show("Insufficient funds"))
            .handle(|ui, _: DisplayEnterPin| ui.show("Please enter your PIN (0-9)"))
            .handle(|ui, _: DisplayEnterCard| ui.show("Please insert your card (I)"))
            .handle(|ui, command: DisplayBalance| {
                ui.show(&format!("The balance of your account is {}", command.amount));
            })
            .handle(|ui, _: DisplayWithdrawalOptions| {
                let offer = format!("Withdraw {}? (w)", ui.withdrawal_amount);
                ui.show(&offer);
                ui.show("Display Balance? (b)");
                ui.show("Cancel? (c)");
            })
            .handle(|ui, _: DisplayWithdrawalCancelled| ui.show("Withdrawal cancelled"))
            .handle(|ui, _: DisplayPinIncorrectMessage| ui.show("PIN is incorrect"))
            .handle(|ui, _: EjectCard| ui.show("Ejecting card"))
            .run(self)
    }
}
