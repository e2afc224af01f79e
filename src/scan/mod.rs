mod error;
mod scanner;
mod token;

pub use error::{Reporter, ScanError, ScanErrorKind};
pub use scanner::{scan_tokens, Scanner};
pub use token::{Literal, Token, TokenKind};
