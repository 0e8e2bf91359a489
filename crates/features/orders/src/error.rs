use std::borrow::Cow;

/// Errors raised by the intake engine and the collaborators it talks to.
#[mymove_derive::mymove_error]
pub enum OrdersError {
    /// Feature flag service failure. Never fatal: the gate treats it as "disabled".
    #[error("Feature flag lookup failed{}: {message}", format_context(.context))]
    FlagLookup { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Counseling office, rank, or duty location lookup failure.
    #[error("Lookup failed{}: {message}", format_context(.context))]
    Lookup { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Duty location search failed{}: {message}", format_context(.context))]
    Search { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Rejected by the orders submission API.
    #[error("Submission failed{}: {message}", format_context(.context))]
    Submission { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The form does not satisfy its current schema.
    #[error("Form is not valid{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A submission is already in flight.
    #[error("Submission in progress{}: {message}", format_context(.context))]
    Busy { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Payload encoding failed{}: {source}", format_context(.context))]
    Encode { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Internal intake error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
