use derive_more::{Display, Error};

#[derive(Debug, Display, Error, PartialEq, Eq)]
pub enum SortError {
    #[display(
        fmt = "unknown algorithm `{}`, expected one of: quick, heap, merge, bubble",
        _0
    )]
    InvalidAlgorithm(#[error(not(source))] String),

    #[display(fmt = "malformed {} `{}`", field, value)]
    MalformedField { field: &'static str, value: String },
}
