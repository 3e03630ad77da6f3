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
use std::any::type_name;
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use tracing::{instrument, trace};

use crate::common::{Flow, Mailbox};
use crate::message::{Envelope, SystemSignal};
use crate::traits::{ActorMessage, Payload};

/// Type-erased binding: consumes the message on a match, hands it back otherwise.
type Binding<'a, M, C> = Box<dyn FnMut(&mut C, M) -> Result<(), M> + 'a>;

/// A single-use, chainable set of `(payload type, handler)` bindings over one mailbox.
///
/// A dispatcher is built from [`Receiver::wait`](crate::common::Receiver::wait) and
/// extended with [`handle`](Dispatcher::handle); each call consumes the previous builder,
/// so only the newest one can ever be run. Nothing is dequeued until
/// [`run`](Dispatcher::run) is called.
///
/// When run, the dispatcher pops envelopes until one of these happens:
///
/// 1. A message matches a binding. Bindings are tried newest first; the first whose
///    payload type matches receives the payload and `run` returns [`Flow::Handled`].
///    Messages still queued behind it stay in the mailbox for the next dispatcher.
/// 2. [`SystemSignal::Close`] is popped. No handler runs and `run` returns
///    [`Flow::Closed`].
///
/// A message no binding accepts is dropped and draining continues. A dispatcher with
/// no bindings therefore discards everything until `Close`.
///
/// Handlers receive `&mut C`, the context passed to `run`, so several handlers can
/// mutate the same actor state without fighting over captured borrows. A panicking
/// handler unwinds through `run`; its message has already left the mailbox.
///
/// ```rust,ignore
/// let flow = receiver
///     .wait::<Machine>()
///     .handle(|machine, digit: DigitPressed| machine.push(digit.digit))
///     .handle(|machine, _: CancelPressed| machine.cancel())
///     .run(&mut machine);
/// ```
#[must_use = "a dispatcher does nothing until `run` is called"]
pub struct Dispatcher<'a, M, C> {
    mailbox: Arc<Mailbox<M>>,
    bindings: Vec<Binding<'a, M, C>>,
    payload_types: Vec<&'static str>,
}

impl<'a, M: ActorMessage, C> Dispatcher<'a, M, C> {
    pub(crate) fn new(mailbox: Arc<Mailbox<M>>) -> Self {
        Self {
            mailbox,
            bindings: Vec::new(),
            payload_types: Vec::new(),
        }
    }

    /// Adds a binding for payload type `P` and returns the extended dispatcher.
    ///
    /// Newer bindings are offered a message before older ones, so binding the same
    /// payload type twice shadows the earlier handler.
    pub fn handle<P>(mut self, mut handler: impl FnMut(&mut C, P) + 'a) -> Self
    where
        P: Payload<M> + 'a,
        C: 'a,
    {
        let payload_type = type_name::<P>();
        trace!(payload_type, bindings = self.bindings.len() + 1, "binding added");
        self.bindings.push(Box::new(move |context: &mut C, message: M| {
            let payload = P::extract(message)?;
            handler(context, payload);
            Ok(())
        }));
        self.payload_types.push(payload_type);
        self
    }

    /// Number of bindings registered so far.
    pub fn bindings(&self) -> usize {
        self.bindings.len()
    }

    /// Blocks on the mailbox until one binding handles a message or `Close` arrives.
    #[instrument(skip_all, level = "trace", fields(bindings = self.bindings.len()))]
    pub fn run(mut self, context: &mut C) -> Flow {
        loop {
            let message = match self.mailbox.wait_and_pop() {
                Envelope::Message(message) => message,
                Envelope::Signal(SystemSignal::Close) => {
                    trace!("close signal received");
                    return Flow::Closed;
                }
            };
            match self.dispatch(context, message) {
                Ok(payload_type) => {
                    trace!(payload_type, "message handled");
                    return Flow::Handled;
                }
                Err(unmatched) => trace!(?unmatched, "no binding matched, message discarded"),
            }
        }
    }

    fn dispatch(&mut self, context: &mut C, message: M) -> Result<&'static str, M> {
        let mut message = message;
        for (binding, payload_type) in self
            .bindings
            .iter_mut()
            .zip(self.payload_types.iter())
            .rev()
        {
            match binding(context, message) {
                Ok(()) => return Ok(*payload_type),
                Err(unmatched) => message = unmatched,
            }
        }
        Err(message)
    }
}

impl<M, C> Debug for Dispatcher<'_, M, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("payload_types", &self.payload_types)
            .finish_non_exhaustive()
    }
}
