pub(crate) mod atoms;
