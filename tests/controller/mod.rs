use crit_fumble_test_utils::prelude::*;

use crate::util::{json_body, redirect_location, TestContextExt};

mod account;
mod admin;
mod auth;
mod character;
mod page;
mod proxy;
mod world_anvil;
