//! letssleep main entrypoint.

use letssleep::run;
use letssleep::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
