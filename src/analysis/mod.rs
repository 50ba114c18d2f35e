pub mod aggregate;
pub mod scanner;
pub mod score;

pub use aggregate::aggregate;
pub use scanner::ProfileScanner;
pub use score::{hacker_score, language_color};
