use mymove_derive::mymove_error;
use std::borrow::Cow;

#[mymove_error]
pub enum DemoError {
    #[error("Decode error{}: {source}", format_context(.context))]
    Decode {
        #[source]
        source: serde_json::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err: DemoError = "boom".into();
    assert_eq!(err.kind(), "Internal");
}
