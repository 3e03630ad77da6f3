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
#![forbid(unsafe_code)]

//! Testing utilities for Teller actors.
//!
//! Actor tests block real OS threads on real mailboxes, so a missing reply or a
//! forgotten `Close` hangs the test instead of failing it. [`teller_test`] runs the test
//! body on a watchdog-supervised thread and turns such hangs into failures.
//!
//! ```ignore
//! use teller_test::prelude::*;
//!
//! #[teller_test(timeout_secs = 5)]
//! fn controller_answers() -> anyhow::Result<()> {
//!     // spawn actors, send, assert, close, join
//!     Ok(())
//! }
//! ```

pub use parking_lot;
pub use tracing;
pub use teller_test_macro::teller_test;

use std::time::Duration;

/// Timeout applied by `#[teller_test]` when no `timeout_secs` is given.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Commonly used test items.
pub mod prelude {
    pub use crate::teller_test;
    pub use crate::DEFAULT_TIMEOUT;
}
