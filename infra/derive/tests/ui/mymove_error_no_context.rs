use mymove_derive::mymove_error;

#[mymove_error]
pub enum ParseError {
    Decode { source: std::num::ParseIntError },
}

fn main() {}
