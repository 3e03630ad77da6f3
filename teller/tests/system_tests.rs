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

use std::time::Duration;

use teller::config::AtmConfig;
use teller::keypad::{self, Keypress};
use teller::prelude::*;
use teller_test::prelude::*;

use crate::setup::{initialize_tracing, SharedDisplay};

mod setup;

const WAIT: Duration = Duration::from_secs(5);

/// The three actors on their own threads, wired the way the `atm` binary wires them.
struct System {
    atm: ActorThread<AtmMessage>,
    bank: ActorThread<BankMessage>,
    interface: ActorThread<InterfaceMessage>,
    display: SharedDisplay,
    keys: AtmConfig,
}

impl System {
    fn start() -> anyhow::Result<Self> {
        let config = TellerConfig::default();
        let display = SharedDisplay::default();
        let bank = ActorThread::spawn(BankMachine::from_config(&config.bank))?;
        let interface = ActorThread::spawn(
            InterfaceMachine::new(display.clone())
                .with_withdrawal_amount(config.atm.demo_withdrawal),
        )?;
        let atm = ActorThread::spawn(AtmController::new(bank.sender(), interface.sender()))?;
        Ok(Self {
            atm,
            bank,
            interface,
            display,
            keys: config.atm,
        })
    }

    fn press(&self, keys: &str) {
        for key in keys.chars() {
            if let Keypress::Send(message) = keypad::translate(key, &self.keys) {
                self.atm.sender().send(message);
            }
        }
    }

    fn expect(&self, line: &str, count: usize) {
        assert!(
            self.display.wait_for_occurrences(line, count, WAIT),
            "never saw {line:?} x{count}; display so far: {:#?}",
            self.display.lines()
        );
    }

    fn shutdown(self) -> anyhow::Result<Vec<String>> {
        self.bank.close();
        self.atm.close();
        self.interface.close();
        self.atm.join()?;
        self.bank.join()?;
        self.interface.join()?;
        Ok(self.display.lines())
    }
}

/// **Scenario:** on the default demo account, withdraw 50, then start a second
/// conversation and ask for the balance.
///
/// **Verification:** the money is issued, the card ejected, and the balance shown in the
/// second conversation is 199 - 50.
#[teller_test(timeout_secs = 20)]
fn withdrawal_then_balance_across_two_cards() -> anyhow::Result<()> {
    initialize_tracing();
    let system = System::start()?;

    system.expect("Please insert your card (I)", 1);
    system.press("i1937");
    system.expect("Withdraw 50? (w)", 1);
    system.press("w");
    system.expect("Issuing 50", 1);
    system.expect("Ejecting card", 1);

    system.expect("Please insert your card (I)", 2);
    system.press("i1937");
    system.expect("Withdraw 50? (w)", 2);
    system.press("b");
    system.expect("The balance of your account is 149", 1);
    system.expect("Withdraw 50? (w)", 3);
    system.press("c");
    system.expect("Ejecting card", 2);

    let lines = system.shutdown()?;
    assert_eq!(lines.iter().filter(|line| *line == "Issuing 50").count(), 1);
    Ok(())
}

#[teller_test(timeout_secs = 20)]
fn wrong_pin_ejects_the_card() -> anyhow::Result<()> {
    initialize_tracing();
    let system = System::start()?;

    system.press("i0000");
    system.expect("PIN is incorrect", 1);
    system.expect("Ejecting card", 1);

    let lines = system.shutdown()?;
    assert!(!lines.iter().any(|line| line.starts_with("Issuing")));
    Ok(())
}

/// Withdrawing more than the balance is refused and nothing is issued.
#[teller_test(timeout_secs = 20)]
fn overdraw_is_refused_end_to_end() -> anyhow::Result<()> {
    initialize_tracing();
    let system = System::start()?;

    for round in 1..=4 {
        system.expect("Please insert your card (I)", round);
        system.press("i1937");
        system.expect("Withdraw 50? (w)", round);
        system.press("w");
        system.expect("Ejecting card", round);
    }

    let lines = system.shutdown()?;
    let issued = lines.iter().filter(|line| *line == "Issuing 50").count();
    let refused = lines
        .iter()
        .filter(|line| *line == "Insufficient funds")
        .count();
    assert_eq!((issued, refused), (3, 1), "199 covers three withdrawals of 50");
    Ok(())
}

#[teller_test]
fn closing_an_idle_system_joins_cleanly() -> anyhow::Result<()> {
    initialize_tracing();
    let system = System::start()?;
    system.expect("Please insert your card (I)", 1);
    let lines = system.shutdown()?;
    assert_eq!(lines, vec!["Please insert your card (I)"]);
    Ok(())
}
