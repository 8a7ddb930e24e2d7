//! Pure calculator rules. Nothing here touches the browser, so the whole
//! layer runs under native `cargo test`.

pub mod calculator;
pub mod errors;
pub mod logging;
pub mod time;
