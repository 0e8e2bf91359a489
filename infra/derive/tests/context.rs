use mymove_derive::mymove_error;
use std::borrow::Cow;

#[mymove_error]
pub enum LookupError {
    #[error("Decode error{}: {source}", format_context(.context))]
    Decode { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn decode(raw: &str) -> Result<u32, LookupError> {
    serde_json::from_str::<u32>(raw).context("Decoding allowance")
}

#[test]
fn source_errors_gain_context_and_kind() {
    let err = decode("not-a-number").expect_err("decode should fail");
    assert_eq!(err.kind(), "Decode");
    assert!(err.to_string().starts_with("Decode error (Decoding allowance): "));
}

#[test]
fn context_overrides_on_domain_results() {
    let res: Result<(), LookupError> =
        Err(LookupError::NotFound { message: "duty location".into(), context: None });
    let err = res.context("lookup by id").expect_err("still an error");
    assert_eq!(err.to_string(), "Not found (lookup by id): duty location");
}

#[test]
fn question_mark_converts_source_errors() {
    fn run() -> Result<u32, LookupError> {
        let v: u32 = serde_json::from_str("[]")?;
        Ok(v)
    }
    let err = run().expect_err("array is not a number");
    assert!(matches!(err, LookupError::Decode { context: None, .. }));
}

#[test]
fn strings_become_internal_errors() {
    let err = LookupError::from(format!("unexpected state {}", 3));
    assert_eq!(err.kind(), "Internal");
    assert_eq!(err.to_string(), "Internal error: unexpected state 3");
}
