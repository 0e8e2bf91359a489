use mymove_derive::mymove_error;

#[mymove_error]
pub enum StoreError {
    Internal { message: std::borrow::Cow<'static, str>, context: Option<String> },
}

fn main() {}
