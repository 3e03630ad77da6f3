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

// ATM demo: three actors on three threads, driven from the keyboard.
//
// Keys: i insert card, 0-9 PIN digits, w withdraw, b balance, c cancel, q quit.
// The display goes to stdout; logs go to a file so the two never interleave.

use std::io::{self, Read};

use anyhow::Result;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use teller::config::LoggingConfig;
use teller::keypad::{self, Keypress};
use teller::prelude::*;

fn main() -> Result<()> {
    let config = TellerConfig::load();
    let _guard = initialize_tracing(&config.logging)?;
    info!("** ATM startup **");

    let bank = ActorThread::spawn(BankMachine::from_config(&config.bank))?;
    let interface = ActorThread::spawn(
        InterfaceMachine::stdout().with_withdrawal_amount(config.atm.demo_withdrawal),
    )?;
    let atm = ActorThread::spawn(
        AtmController::new(bank.sender(), interface.sender())
            .with_pin_length(config.atm.pin_length),
    )?;

    let atm_queue = atm.sender();
    for byte in io::stdin().lock().bytes() {
        let key = match byte {
            Ok(byte) => char::from(byte),
            Err(e) => {
                error!("failed to read keyboard input: {e}");
                break;
            }
        };
        match keypad::translate(key, &config.atm) {
            Keypress::Send(message) => atm_queue.send(message),
            Keypress::Quit => break,
            Keypress::Ignored => {}
        }
    }

    info!("shutting down actors");
    bank.close();
    atm.close();
    interface.close();

    atm.join()?;
    bank.join()?;
    interface.join()?;
    info!("** ATM shutdown complete **");
    Ok(())
}

fn initialize_tracing(config: &LoggingConfig) -> Result<WorkerGuard> {
    std::fs::create_dir_all(&config.directory)?;
    let file_appender =
        RollingFileAppender::new(Rotation::NEVER, &config.directory, &config.file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))?;

    let subscriber = FmtSubscriber::builder()
        .with_span_events(FmtSpan::NONE)
        .compact()
        .with_line_number(true)
        .with_target(true)
        .with_thread_names(true)
        .with_ansi(false)
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(guard)
}
