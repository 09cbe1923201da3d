#![forbid(unsafe_code)]

//! Print the shared vs typed empty-list demo.

use ckit_demo_showcase::{empty_list_demo, init_logging};

fn main() {
    init_logging();

    for line in empty_list_demo::narration() {
        println!("{line}");
    }
}
