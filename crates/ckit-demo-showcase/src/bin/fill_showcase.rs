#![forbid(unsafe_code)]

//! Print the fill vs generate demo.

use ckit_demo_showcase::{fill_demo, init_logging};
use ckit_seq::RangeError;

fn main() -> Result<(), RangeError> {
    init_logging();

    for line in fill_demo::narration()? {
        println!("{line}");
    }
    Ok(())
}
