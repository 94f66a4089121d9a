use std::process::exit;

fn main() {
    if let Err(err) = pagelint::run() {
        eprintln!("pagelint: {}", err);
        exit(1);
    }
}
