//! Declarative macros which generate the wire types.
//!
//! Every enum and record in this crate goes through one of these, so the
//! decode/encode contract only needs to be implemented (and reviewed) once.
//!
//! Easily debug/view the macro expansions with `cargo expand`:
//!
//! ```bash
//! $ cargo install cargo-expand
//! $ cd sdk-objects/
//! $ cargo expand enums::withdrawal_mode
//! ```

/// This macro takes a wire enum declaration and generates the enum plus impls
/// for [`WireEnum`] and its dependent traits.
///
/// ### Example
///
/// ```ignore
/// wire_enum! {
///     /// The flavor of a foo.
///     pub enum FooKind {
///         /// A token this version of the SDK doesn't recognize.
///         Undefined,
///
///         /// A big foo.
///         Big = "BIG",
///         /// A small foo.
///         Small = "SMALL",
///     }
/// }
/// ```
///
/// * All wire enums _must_ have an `Undefined` variant and it _must_ be first.
///   Any token not listed decodes to `Undefined` instead of failing, so the
///   client survives the server adding new variants.
/// * `Undefined` encodes to [`UNDEFINED_WIRE_TOKEN`]. It is a sentinel and
///   should never be sent in a request.
/// * Duplicate tokens are a compile error.
///
/// [`WireEnum`]: crate::wire::WireEnum
/// [`UNDEFINED_WIRE_TOKEN`]: crate::wire::UNDEFINED_WIRE_TOKEN
macro_rules! wire_enum {
    {
        $(#[$enum_meta:meta])*
        pub enum $enum_name:ident {
            $( #[doc = $undefined_doc:literal] )*
            Undefined,

            $(
                $( #[doc = $item_doc:literal] )*
                $item_name:ident = $item_token:literal
            ),*

            $(,)?
        }
    } => { // generate the enum + impls

        $(#[$enum_meta])*
        #[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
        #[derive(::serde_with::SerializeDisplay)]
        #[derive(::serde_with::DeserializeFromStr)]
        pub enum $enum_name {
            $( #[doc = $undefined_doc] )*
            #[default]
            Undefined,

            $(
                $( #[doc = $item_doc] )*
                $item_name
            ),*
        }

        // --- macro-generated impls --- //

        impl $crate::wire::WireType for $enum_name {
            const TYPENAME: &'static str = stringify!($enum_name);
        }

        impl $crate::wire::WireShape for $enum_name {
            const SHAPE: $crate::wire::Shape = $crate::wire::Shape::Scalar;
        }

        impl $crate::wire::WireEnum for $enum_name {
            const KNOWN_VARIANTS: &'static [Self] = &[
                $( Self::$item_name, )*
            ];

            const UNDEFINED: Self = Self::Undefined;

            fn as_wire_str(self) -> &'static str {
                match self {
                    Self::Undefined => $crate::wire::UNDEFINED_WIRE_TOKEN,
                    $( Self::$item_name => $item_token, )*
                }
            }

            fn from_wire_str(token: &str) -> Self {
                // this deny attr makes duplicate tokens a compile error : )
                #[deny(unreachable_patterns)]
                match token {
                    $( $item_token => Self::$item_name, )*
                    _ => {
                        $crate::wire::log_undefined_token(
                            stringify!($enum_name),
                            token,
                        );
                        Self::Undefined
                    }
                }
            }
        }

        // --- standard trait impls --- //

        impl ::std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let token = $crate::wire::WireEnum::as_wire_str(*self);
                f.write_str(token)
            }
        }

        impl ::std::str::FromStr for $enum_name {
            type Err = ::std::convert::Infallible;

            #[inline]
            fn from_str(token: &str) -> Result<Self, Self::Err> {
                Ok($crate::wire::WireEnum::from_wire_str(token))
            }
        }

        // --- impl Arbitrary --- //

        // Samples `Undefined` as well, since it roundtrips through the
        // `"undefined"` token like any unknown token would.
        #[cfg(any(test, feature = "test-utils"))]
        impl proptest::arbitrary::Arbitrary for $enum_name {
            type Parameters = ();
            type Strategy = proptest::strategy::BoxedStrategy<Self>;

            fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
                use proptest::{
                    prop_oneof,
                    sample,
                    strategy::{Just, Strategy},
                };
                use $crate::wire::WireEnum;

                prop_oneof![
                    1 => Just(Self::Undefined),
                    9 => sample::select(Self::KNOWN_VARIANTS),
                ]
                .boxed()
            }
        }
    }
}

/// Pair an output record with its verbatim projection fragment. The fragment
/// name is always `<Record>Fragment`.
///
/// ```ignore
/// output_fragment!(PayInvoiceOutput, PAY_INVOICE_OUTPUT_FRAGMENT);
/// ```
macro_rules! output_fragment {
    ($record_name:ident, $fragment:ident $(,)?) => {
        impl $crate::wire::OutputRecord for $record_name {
            const FRAGMENT_NAME: &'static str =
                concat!(stringify!($record_name), "Fragment");
            const FRAGMENT: &'static str = $fragment;
        }
    };
}

/// This macro takes a record struct declaration where each field is annotated
/// with its wire name, and generates the struct (with serde renames) plus an
/// impl for [`WireRecord`].
///
/// ### Example
///
/// ```ignore
/// wire_record! {
///     /// Cancel an open invoice.
///     #[derive(Clone, Debug, Eq, PartialEq)]
///     pub struct CancelInvoiceInput("cancel_invoice_input") {
///         /// The id of the invoice to cancel.
///         pub invoice_id: String = "cancel_invoice_input_invoice_id",
///     }
/// }
/// ```
///
/// * The string after the struct name is the wire prefix: the snake_case of
///   the struct name. Every wire name must be `<prefix>_<field name>`.
/// * `Option<_>` fields are optional. They serialize as `null` when unset and
///   decode from either `null` or an absent key.
/// * Unknown keys are ignored on decode.
///
/// [`WireRecord`]: crate::wire::WireRecord
macro_rules! wire_record {
    {
        $(#[$struct_meta:meta])*
        pub struct $record_name:ident ( $wire_prefix:literal ) {
            $(
                $( #[$field_meta:meta] )*
                pub $field_name:ident : $field_ty:ty = $field_wire:literal
            ),*

            $(,)?
        }
    } => { // generate the record struct + impls

        $(#[$struct_meta])*
        #[derive(::serde::Serialize, ::serde::Deserialize)]
        pub struct $record_name {
            $(
                $( #[$field_meta] )*
                #[serde(rename = $field_wire)]
                pub $field_name: $field_ty,
            )*
        }

        impl $crate::wire::WireType for $record_name {
            const TYPENAME: &'static str = stringify!($record_name);
        }

        impl $crate::wire::WireShape for $record_name {
            const SHAPE: $crate::wire::Shape = $crate::wire::Shape::Object;
            const NESTED: &'static [$crate::wire::WireField] =
                <Self as $crate::wire::WireRecord>::FIELDS;
        }

        impl $crate::wire::WireRecord for $record_name {
            const WIRE_PREFIX: &'static str = $wire_prefix;
            const FIELDS: &'static [$crate::wire::WireField] = &[
                $(
                    $crate::wire::WireField {
                        name: stringify!($field_name),
                        wire: $field_wire,
                        shape: <$field_ty as $crate::wire::WireShape>::SHAPE,
                        optional:
                            <$field_ty as $crate::wire::WireShape>::OPTIONAL,
                        nested: <$field_ty as $crate::wire::WireShape>::NESTED,
                    },
                )*
            ];
        }
    }
}
