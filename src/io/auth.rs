use std::io::{self, BufRead, Write};

use log::info;

// Placeholder credential for the exercise; there is no credential store.
const CORRECT_PASSWORD: &str = "password123";

/// Prompts for a username and password on the controlling terminal.
/// The username is greeted but plays no part in authorization; the
/// password is read with echo suppressed and checked against the fixed
/// constant.
pub fn login() -> io::Result<bool> {
    print!("Username: ");
    io::stdout().flush()?;

    let mut username = String::new();
    io::stdin().lock().read_line(&mut username)?;
    let username = username.trim();

    let password = rpassword::prompt_password("Password: ")?;

    if verify_password(&password) {
        println!("Authentication successful. Welcome, {}!", username);
        info!("user {} authenticated", username);
        Ok(true)
    } else {
        println!("Authentication failed.");
        Ok(false)
    }
}

fn verify_password(password: &str) -> bool {
    password == CORRECT_PASSWORD
}
