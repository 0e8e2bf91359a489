use mymove_derive::mymove_error;

#[mymove_error]
pub enum LookupError {
    NotFound(String),
}

fn main() {}
