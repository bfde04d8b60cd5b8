//! End-to-end validation pass: run every field check, then report all
//! failures at once.
//!
//! Run with: `cargo run --example field_validation`

use error_ledger::prelude::*;

#[derive(Debug)]
struct Signup {
    username: String,
    email: String,
    age: i32,
}

fn validate(signup: &Signup) -> MultiResult<()> {
    let mut me = MultiError::new();

    if signup.username.len() < 3 {
        fail!(me, "username `{}` is too short (minimum 3)", signup.username);
    }
    if !signup.email.contains('@') {
        fail!(me, "email `{}` is missing an `@`", signup.email);
    }
    if signup.age < 13 {
        fail!(me, "age {} is below the minimum of 13", signup.age);
    }

    me.into_result()
}

fn main() {
    let good = Signup {
        username: "alice".to_string(),
        email: "alice@example.com".to_string(),
        age: 30,
    };
    assert!(validate(&good).is_ok());
    println!("`{}` passed validation", good.username);

    let bad = Signup {
        username: "al".to_string(),
        email: "al.example.com".to_string(),
        age: 11,
    };
    if let Err(failures) = validate(&bad) {
        println!("`{}` failed {} checks:", bad.username, failures.len());
        println!("{failures}");
    }
}
