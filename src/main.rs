//! otledger main entrypoint.

use otledger::run;

fn main() {
    if let Err(e) = run() {
        otledger::ui::messages::error(e);
        std::process::exit(1);
    }
}
