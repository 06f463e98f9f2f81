pub(crate) mod newtype_id;
