//! Macro generating port error enums with `impl Into` constructors.

/// Declare a `thiserror` enum whose variants all carry named fields, plus one
/// snake_case constructor per variant accepting `impl Into<FieldType>`.
macro_rules! define_port_error {
    (@ctor $variant:ident ($($params:tt)*) ($($inits:tt)*)) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field : $ty),* },
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant () () $($field : $ty,)*);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum SamplePortError {
            Message { message: String } => "message: {message}",
            Count { count: u32 } => "count: {count}",
            Both { message: String, count: u32 } => "both: {message} ({count})",
        }
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        assert_eq!(SamplePortError::message("hello").to_string(), "message: hello");
    }

    #[test]
    fn constructors_preserve_non_string_types() {
        assert_eq!(SamplePortError::count(42_u32).to_string(), "count: 42");
    }

    #[test]
    fn constructors_support_mixed_fields() {
        assert_eq!(SamplePortError::both("hello", 42_u32).to_string(), "both: hello (42)");
    }
}
