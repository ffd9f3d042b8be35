use backed_enum::enum_error;

#[enum_error]
pub enum ReadError {
    Malformed(std::num::ParseIntError),
}

fn main() {}
