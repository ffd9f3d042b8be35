use backed_enum::enum_error;

#[enum_error]
pub enum ReadError {
    #[error("Malformed input{}: {source}", format_context(.context))]
    Malformed { source: std::num::ParseIntError, context: Option<String> },
}

fn main() {}
