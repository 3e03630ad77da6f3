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

use crate::config::AtmConfig;
use crate::messages::{
    AtmMessage, BalancePressed, CancelPressed, CardInserted, DigitPressed, WithdrawPressed,
};

/// What a single key on the demo keypad means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keypress {
    /// Forward this message to the controller.
    Send(AtmMessage),
    /// Leave the input loop and shut every actor down.
    Quit,
    /// Not a keypad key.
    Ignored,
}

/// Maps one input character to a keypad action.
///
/// Digits become [`DigitPressed`], `b` [`BalancePressed`], `w` a [`WithdrawPressed`] of the
/// configured demo amount, `c` [`CancelPressed`], `i` a [`CardInserted`] for the demo
/// account and `q` quits. Letters are case-insensitive.
pub fn translate(key: char, config: &AtmConfig) -> Keypress {
    match key {
        '0'..='9' => Keypress::Send(DigitPressed::new(key).into()),
        'b' | 'B' => Keypress::Send(BalancePressed::new().into()),
        'w' | 'W' => Keypress::Send(WithdrawPressed::new(config.demo_withdrawal).into()),
        'c' | 'C' => Keypress::Send(CancelPressed::new().into()),
        'i' | 'I' => Keypress::Send(CardInserted::new(config.demo_account.clone()).into()),
        'q' | 'Q' => Keypress::Quit,
        _ => Keypress::Ignored,
    }
}
