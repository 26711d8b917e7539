#![allow(unused_imports)] // workaround spurious warnings

use failure::Fail;
use lazy_static::lazy_static;
use maplit::hashmap;
use unwrap::unwrap;
use log::{debug, trace, warn};

use std::collections::HashMap;
use std::convert::TryFrom;
use std::fmt;
use std::fmt::Display;
use std::io::{self, Write};
use std::str::FromStr;
use std::sync::Arc;

pub mod core;
pub mod typechecker;
pub mod config;
pub mod logger;

pub use self::core::{Ctx, Double, Label, Term, TermKind, Universe, V, judgmentally_equal};
pub use self::typechecker::{type_of, Checker, TypeError};
pub use self::config::{Config, ConfigError};

