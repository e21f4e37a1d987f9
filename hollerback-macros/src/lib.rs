use proc_macro::TokenStream;

mod host;

/// Derive macro that mixes callback-enabled operations into a host type.
///
/// Generates:
/// - `impl Hollerback for Host {}`, giving instances `host.hollerback_for(..)`
///   and `host.hollerback_with(..)`
/// - inherent associated functions `Host::hollerback_for(setup, body)` and
///   `Host::hollerback_with(factory, setup, body)` with the same behavior
///
/// Use `#[hollerback(crate = "path::to::hollerback")]` when the facade crate
/// is re-exported under another path.
#[proc_macro_derive(Hollerback, attributes(hollerback))]
pub fn derive_hollerback(input: TokenStream) -> TokenStream {
    host::derive_hollerback_impl(input)
}
