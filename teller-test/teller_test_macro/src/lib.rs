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

use proc_macro::TokenStream;

use quote::quote;
use syn::{parse_macro_input, ItemFn, LitInt};

/// Runs a blocking test body on a worker thread under a watchdog.
///
/// The annotated function must take no arguments. It runs inside an `info_span` named
/// after the test; a panic in the body fails the test with the original message, and a
/// body that has not returned after the timeout fails the test instead of hanging it.
///
/// Accepts `timeout_secs = N`; the default is `teller_test::DEFAULT_TIMEOUT`.
#[proc_macro_attribute]
pub fn teller_test(attr: TokenStream, item: TokenStream) -> TokenStream {
    let mut timeout_secs: Option<u64> = None;
    let parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("timeout_secs") {
            let value: LitInt = meta.value()?.parse()?;
            timeout_secs = Some(value.base10_parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported teller_test option, expected `timeout_secs`"))
        }
    });
    parse_macro_input!(attr with parser);

    let input = parse_macro_input!(item as ItemFn);
    let vis = &input.vis;
    let sig = &input.sig;
    let body = &input.block;
    let attrs = &input.attrs;
    let name = &sig.ident;
    let output = &sig.output;

    if !sig.inputs.is_empty() {
        return syn::Error::new_spanned(&sig.inputs, "#[teller_test] functions take no arguments")
            .to_compile_error()
            .into();
    }

    let inner_name = syn::Ident::new(&format!("__{}_body", name), name.span());
    let timeout = match timeout_secs {
        Some(secs) => quote!(::std::time::Duration::from_secs(#secs)),
        None => quote!(::teller_test::DEFAULT_TIMEOUT),
    };

    let output = quote! {
        #[test]
        #(#attrs)*
        #vis fn #name() {
            use ::std::sync::Arc;
            use ::teller_test::parking_lot::{Condvar, Mutex};

            let finished: Arc<(Mutex<bool>, Condvar)> = Arc::new((Mutex::new(false), Condvar::new()));
            let signal = Arc::clone(&finished);
            let test_name = stringify!(#name);

            let worker = ::std::thread::Builder::new()
                .name(test_name.to_string())
                .spawn(move || {
                    struct Finished(Arc<(Mutex<bool>, Condvar)>);
                    impl Drop for Finished {
                        fn drop(&mut self) {
                            let (done, wake) = &*self.0;
                            *done.lock() = true;
                            wake.notify_all();
                        }
                    }
                    let _finished = Finished(signal);
                    let test_span = ::teller_test::tracing::info_span!("teller_test", name = test_name);
                    let _enter = test_span.enter();
                    #inner_name()
                })
                .expect("failed to spawn test worker thread");

            {
                let (done, wake) = &*finished;
                let mut done = done.lock();
                let deadline = ::std::time::Instant::now() + #timeout;
                while !*done {
                    if wake.wait_until(&mut done, deadline).timed_out() && !*done {
                        panic!(
                            "test `{}` did not finish within {:?}; an actor is probably blocked on its mailbox",
                            test_name,
                            #timeout
                        );
                    }
                }
            }

            match worker.join() {
                Ok(result) => result.unwrap(),
                Err(payload) => ::std::panic::resume_unwind(payload),
            }
        }

        fn #inner_name() #output #body
    };

    output.into()
}
