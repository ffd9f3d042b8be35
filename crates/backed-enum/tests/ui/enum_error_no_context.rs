use backed_enum::enum_error;

#[enum_error]
pub enum ReadError {
    #[error("Malformed input: {source}")]
    Malformed { source: std::num::ParseIntError },
}

fn main() {}
