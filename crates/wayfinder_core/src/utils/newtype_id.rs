/// Defines a 1-based external id newtype. Storage stays zero-based; `offset`
/// is the only way to turn an id into a slot and it rejects 0.
#[macro_export]
macro_rules! define_id_newtype {
    ($name:ident) => {
        #[derive(
            serde::Serialize,
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
        )]
        #[serde(transparent)]
        pub struct $name(usize);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl $name {
            pub const fn new(id: usize) -> Self {
                Self(id)
            }

            pub const fn get(&self) -> usize {
                self.0
            }

            /// Zero-based storage slot, `None` for the reserved id 0.
            pub const fn offset(&self) -> Option<usize> {
                self.0.checked_sub(1)
            }

            pub(crate) const fn from_offset(offset: usize) -> Self {
                Self(offset + 1)
            }
        }
    };
}
