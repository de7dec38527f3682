mod io;
mod kernel;

use std::io::stdin;
use std::process;

use kernel::Driver;

fn main() {
    env_logger::init();

    let authenticated = io::auth::login().unwrap_or_else(|err| {
        eprintln!("Error: login ({})", err);
        false
    });

    if !authenticated {
        println!("Authentication failed. Exiting program.");
        process::exit(1);
    }

    let mut driver = Driver::new(stdin().lock());
    if let Err(err) = driver.start() {
        eprintln!("Error: console ({})", err);
        process::exit(1);
    }
}
