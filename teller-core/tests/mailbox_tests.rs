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

use std::thread;
use std::time::Duration;

use teller_core::prelude::*;
use teller_test::prelude::*;

use crate::setup::{
    initialize_tracing,
    messages::{Note, Ping, TestMessage},
};

mod setup;

/// A single producer's sends come out of the mailbox in send order.
#[teller_test]
fn single_producer_order_is_preserved() -> anyhow::Result<()> {
    initialize_tracing();
    let receiver = Receiver::<TestMessage>::new();
    let sender = receiver.sender();

    let producer = thread::spawn(move || {
        for seq in 0..500 {
            sender.send(Ping::new(0, seq));
        }
    });

    for expected in 0..500 {
        match receiver.recv() {
            Envelope::Message(TestMessage::Ping(ping)) => assert_eq!(ping.seq, expected),
            other => panic!("unexpected envelope {other:?}"),
        }
    }
    producer.join().expect("producer panicked");
    assert_eq!(receiver.pending(), 0);
    Ok(())
}

/// Interleaved producers lose nothing, and each producer's own subsequence stays ordered.
#[teller_test]
fn concurrent_producers_keep_their_own_order() -> anyhow::Result<()> {
    initialize_tracing();
    const PRODUCERS: usize = 4;
    const PER_PRODUCER: usize = 250;

    let receiver = Receiver::<TestMessage>::new();
    let producers: Vec<_> = (0..PRODUCERS)
        .map(|producer| {
            let sender = receiver.sender();
            thread::spawn(move || {
                for seq in 0..PER_PRODUCER {
                    sender.send(Ping::new(producer, seq));
                }
            })
        })
        .collect();

    let mut next_seq = [0usize; PRODUCERS];
    for _ in 0..PRODUCERS * PER_PRODUCER {
        let Some(TestMessage::Ping(ping)) = receiver.recv().into_message() else {
            panic!("expected only pings");
        };
        assert_eq!(ping.seq, next_seq[ping.producer], "producer {} reordered", ping.producer);
        next_seq[ping.producer] += 1;
    }
    for producer in producers {
        producer.join().expect("producer panicked");
    }
    assert_eq!(next_seq, [PER_PRODUCER; PRODUCERS]);
    Ok(())
}

#[teller_test]
fn wait_and_pop_blocks_until_something_is_pushed() -> anyhow::Result<()> {
    initialize_tracing();
    let receiver = Receiver::<TestMessage>::new();
    let sender = receiver.sender();

    let consumer = thread::spawn(move || receiver.recv());
    thread::sleep(Duration::from_millis(50));
    assert!(!consumer.is_finished(), "consumer returned from an empty mailbox");

    sender.send(Note::new("wake up".to_string()));
    let envelope = consumer.join().expect("consumer panicked");
    assert_eq!(
        envelope,
        Envelope::Message(TestMessage::Note(Note::new("wake up".to_string())))
    );
    Ok(())
}

#[teller_test]
fn mailbox_reports_pending_envelopes() -> anyhow::Result<()> {
    let mailbox = Mailbox::<TestMessage>::new();
    assert!(mailbox.is_empty());
    mailbox.push(Envelope::Message(Ping::new(0, 0).into()));
    mailbox.push(Envelope::from(SystemSignal::Close));
    assert_eq!(mailbox.len(), 2);

    assert!(!mailbox.wait_and_pop().is_close());
    assert!(mailbox.wait_and_pop().is_close());
    assert!(mailbox.is_empty());
    Ok(())
}

#[teller_test]
fn detached_sender_discards_silently() -> anyhow::Result<()> {
    initialize_tracing();
    let sender = Sender::<TestMessage>::default();
    assert!(sender.is_detached());
    sender.send(Ping::new(0, 0));
    sender.close();
    assert_eq!(sender, Sender::detached());
    Ok(())
}

#[teller_test]
fn senders_compare_by_mailbox_identity() -> anyhow::Result<()> {
    let first = Receiver::<TestMessage>::new();
    let second = Receiver::<TestMessage>::new();

    assert_eq!(first.sender(), first.sender().clone());
    assert_eq!(Sender::from(&first), first.sender());
    assert_ne!(first.sender(), second.sender());
    assert_ne!(first.sender(), Sender::detached());
    Ok(())
}
