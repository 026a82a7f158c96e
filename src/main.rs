//! wlsync main entrypoint.

use wlsync::run;
use wlsync::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
