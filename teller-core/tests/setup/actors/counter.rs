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

use crate::setup::messages::{Boom, Count, Query, Tally, TestMessage};

/// A minimal actor that sums `Tally` amounts and answers `Query` through the
/// embedded reply-to sender. `Boom` makes its handler panic.
#[derive(Debug, Default)]
pub struct Counter {
    pub total: usize,
    incoming: Receiver<TestMessage>,
}

impl Actor for Counter {
    type Message = TestMessage;

    fn name(&self) -> &str {
        "counter"
    }

    fn sender(&self) -> Sender<TestMessage> {
        self.incoming.sender()
    }

    fn step(&mut self) -> Flow {
        self.incoming
            .wait::<Self>()
            .handle(|counter, tally: Tally| counter.total += tally.amount)
            .handle(|counter, query: Query| query.reply_to.send(Count::new(counter.total)))
            .handle(|_, _: Boom| panic!("counter exploded"))
            .run(self)
    }
}
