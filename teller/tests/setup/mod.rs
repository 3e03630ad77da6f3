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
#![allow(dead_code)]

use std::io::{self, Write};
use std::sync::{Arc, Once};
use std::thread;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use teller::prelude::*;

// Ensures tracing initialization happens only once across all tests.
static INIT: Once = Once::new();

/// Installs a global file subscriber writing to `logs/teller_tests.txt`.
pub fn initialize_tracing() {
    INIT.call_once(|| {
        std::fs::create_dir_all("logs").expect("could not create logs dir");

        let file_appender = RollingFileAppender::new(Rotation::NEVER, "logs", "teller_tests.txt");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        // Leak the guard so the writer outlives every test thread.
        Box::leak(Box::new(guard));

        let filter = EnvFilter::new("trace")
            .add_directive("teller::atm=trace".parse().unwrap())
            .add_directive("teller::bank=trace".parse().unwrap())
            .add_directive("teller_core=debug".parse().unwrap());

        let subscriber = FmtSubscriber::builder()
            .with_span_events(FmtSpan::NONE)
            .with_max_level(Level::TRACE)
            .compact()
            .with_line_number(true)
            .without_time()
            .with_target(true)
            .with_thread_names(true)
            .with_env_filter(filter)
            .with_writer(non_blocking)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .expect("setting default subscriber failed");
    });
}

/// An in-memory display the test keeps a handle to after moving a clone into an
/// [`InterfaceMachine`].
#[derive(Debug, Clone, Default)]
pub struct SharedDisplay(Arc<Mutex<Vec<u8>>>);

impl SharedDisplay {
    /// Everything written so far, one entry per line.
    pub fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.0.lock())
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Polls until some line equals `expected` or `timeout` elapses.
    pub fn wait_for_line(&self, expected: &str, timeout: Duration) -> bool {
        self.wait_for_occurrences(expected, 1, timeout)
    }

    /// Polls until `expected` has been written at least `count` times.
    pub fn wait_for_occurrences(&self, expected: &str, count: usize, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if self.occurrences(expected) >= count {
                return true;
            }
            thread::sleep(Duration::from_millis(5));
        }
        false
    }

    /// How many lines equal `expected`.
    pub fn occurrences(&self, expected: &str) -> usize {
        self.lines().iter().filter(|line| *line == expected).count()
    }
}

impl Write for SharedDisplay {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Removes and returns every message already waiting in `receiver`, without blocking.
pub fn drain<M: ActorMessage>(receiver: &Receiver<M>) -> Vec<M> {
    let mut messages = Vec::new();
    while receiver.pending() > 0 {
        if let Some(message) = receiver.recv().into_message() {
            messages.push(message);
        }
    }
    messages
}

/// A controller wired to two recording mailboxes standing in for the bank and the
/// hardware interface, stepped by hand on the test thread.
pub struct Rig {
    pub atm: AtmController,
    pub keypad: Sender<AtmMessage>,
    pub bank: Receiver<BankMessage>,
    pub interface: Receiver<InterfaceMessage>,
}

impl Rig {
    pub fn new() -> Self {
        let bank = Receiver::new();
        let interface = Receiver::new();
        let atm = AtmController::new(bank.sender(), interface.sender());
        let keypad = atm.sender();
        Self {
            atm,
            keypad,
            bank,
            interface,
        }
    }

    /// Sends `message` to the controller and runs exactly one state function.
    pub fn feed(&mut self, message: impl Into<AtmMessage>) -> Flow {
        self.keypad.send(message);
        self.atm.step()
    }

    /// Inserts a card and types `pin`, stopping in whatever state that leads to.
    pub fn insert_card_and_type(&mut self, account: &str, pin: &str) {
        let _ = self.feed(CardInserted::new(account.to_string()));
        for digit in pin.chars() {
            let _ = self.feed(DigitPressed::new(digit));
        }
    }

    /// Drives the controller to `WaitForAction` for `account`, discarding the traffic.
    pub fn authenticated(account: &str) -> Self {
        let mut rig = Self::new();
        rig.insert_card_and_type(account, "1234");
        let _ = rig.feed(PinVerified::new());
        assert_eq!(rig.atm.state(), AtmState::WaitForAction);
        drain(&rig.bank);
        drain(&rig.interface);
        rig
    }

    pub fn bank_messages(&self) -> Vec<BankMessage> {
        drain(&self.bank)
    }

    pub fn interface_messages(&self) -> Vec<InterfaceMessage> {
        drain(&self.interface)
    }
}
