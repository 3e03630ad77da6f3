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
#![allow(unused)]

use derive_new::new;
use teller_core::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Ping {
    pub producer: usize,
    pub seq: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Tally {
    pub amount: usize,
}

// never bound by the counter
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Note {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Query {
    pub reply_to: Sender<ProbeMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Boom;

#[teller_message]
#[derive(PartialEq, Eq)]
pub enum TestMessage {
    Ping(Ping),
    Tally(Tally),
    Note(Note),
    Query(Query),
    Boom(Boom),
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Count {
    pub total: usize,
}

#[teller_message]
#[derive(PartialEq, Eq)]
pub enum ProbeMessage {
    Count(Count),
}
