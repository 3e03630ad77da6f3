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

//! Teller Macro Library
//!
//! Procedural macros for the Teller messaging framework.
//!
//! # Message Macro
//!
//! [`teller_message`] turns a closed enum whose variants each wrap one payload struct
//! into a message set that [`Dispatcher`](../teller_core/struct.Dispatcher.html)
//! bindings can match by payload type:
//!
//! ```ignore
//! #[teller_message]
//! pub enum LampMessage {
//!     SwitchOn(SwitchOn),
//!     Dim(Dim),
//! }
//!
//! receiver
//!     .wait::<Lamp>()
//!     .handle(|lamp, dim: Dim| lamp.level = dim.level)
//!     .run(&mut lamp);
//! ```

use proc_macro::TokenStream;

use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

fn has_derive(input: &DeriveInput, trait_name: &str) -> bool {
    input.attrs.iter().any(|attr| {
        if attr.path().is_ident("derive") {
            let mut found = false;
            let _ = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident(trait_name) {
                    found = true;
                }
                Ok(())
            });
            found
        } else {
            false
        }
    })
}

/// Turns a closed enum into a Teller message set.
///
/// Every variant must be a tuple variant wrapping exactly one payload type, and each
/// payload type may appear in only one variant. For every variant `Name(Payload)` the
/// macro generates:
///
/// - `impl teller_core::Payload<Enum> for Payload`, so a dispatcher binding can
///   match the variant by its payload type;
/// - `impl From<Payload> for Enum`, so `Sender::send` accepts the bare payload.
///
/// It also derives `Clone` and `Debug` when they are not already derived, and asserts
/// at compile time that the enum is `Send + 'static`.
///
/// ```ignore
/// #[teller_message]
/// pub enum AtmMessage {
///     CardInserted(CardInserted),
///     DigitPressed(DigitPressed),
/// }
/// ```
///
/// Generic enums, unit variants and variants with zero or several fields are rejected
/// with an error pointing at the offending item.
#[proc_macro_attribute]
pub fn teller_message(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(
            &input.generics,
            "#[teller_message] does not support generic message sets",
        )
        .to_compile_error()
        .into();
    }

    let Data::Enum(data) = &input.data else {
        return syn::Error::new_spanned(name, "#[teller_message] can only be applied to enums")
            .to_compile_error()
            .into();
    };

    let mut payload_impls = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        let variant_name = &variant.ident;
        let payload = match &variant.fields {
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => &fields.unnamed[0].ty,
            _ => {
                return syn::Error::new_spanned(
                    variant,
                    "#[teller_message] variants must wrap exactly one payload type, e.g. `Ping(Ping)`",
                )
                .to_compile_error()
                .into();
            }
        };
        payload_impls.push(quote! {
            impl ::teller_core::Payload<#name> for #payload {
                #[inline]
                fn extract(message: #name) -> ::core::result::Result<Self, #name> {
                    match message {
                        #name::#variant_name(payload) => ::core::result::Result::Ok(payload),
                        #[allow(unreachable_patterns)]
                        other => ::core::result::Result::Err(other),
                    }
                }
            }

            impl ::core::convert::From<#payload> for #name {
                #[inline]
                fn from(payload: #payload) -> Self {
                    #name::#variant_name(payload)
                }
            }
        });
    }

    let mut derives = Vec::new();
    if !has_derive(&input, "Clone") {
        derives.push(quote!(Clone));
    }
    if !has_derive(&input, "Debug") {
        derives.push(quote!(Debug));
    }
    let derive_attr = if derives.is_empty() {
        quote!()
    } else {
        quote!(#[derive(#(#derives),*)])
    };

    let expanded = quote! {
        #derive_attr
        #input

        #(#payload_impls)*

        const _: fn() = || {
            fn assert_message<T: ::core::marker::Send + 'static>() {}
            assert_message::<#name>();
        };
    };

    expanded.into()
}
