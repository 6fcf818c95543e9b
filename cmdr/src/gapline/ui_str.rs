// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::BIN_NAME;
use std::env::var;

#[must_use]
pub fn goodbye_msg() -> String {
    match var("USER") {
        Ok(username) => format!("Goodbye, {username}. Thanks for using {BIN_NAME}!"),
        Err(_) => format!("Thanks for using {BIN_NAME}!"),
    }
}
