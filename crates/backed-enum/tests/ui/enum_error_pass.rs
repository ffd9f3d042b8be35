use backed_enum::{LoadStatus, enum_error};
use std::borrow::Cow;

#[enum_error]
pub enum StatusError {
    #[error("Unknown status{}: {source}", format_context(.context))]
    Unknown { source: backed_enum::EnumError, context: Option<Cow<'static, str>> },

    #[error("Malformed code{}: {source}", format_context(.context))]
    Malformed { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Unsupported{}: {message}", format_context(.context))]
    Unsupported { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn status(raw: &str) -> Result<&'static str, StatusError> {
    let value = LoadStatus::enumeration().parse(raw).context("reading status")?;
    Ok(*value)
}

fn code(raw: &str) -> Result<u16, StatusError> {
    let code = raw.parse::<u16>()?;
    if code == 0 {
        return Err(StatusError::Unsupported { message: "zero".into(), context: None })
            .context("reading code");
    }
    Ok(code)
}

fn main() {
    assert_eq!(status("idle").ok(), Some("idle"));

    let err = status("done").unwrap_err();
    assert!(err.to_string().starts_with("Unknown status (reading status): "));

    assert!(matches!(code("x"), Err(StatusError::Malformed { context: None, .. })));
    assert_eq!(
        code("0").unwrap_err().to_string(),
        "Unsupported (reading code): zero"
    );
    assert_eq!(code("7").ok(), Some(7));
}
