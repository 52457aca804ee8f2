//! bicycle | cycle through a slice forever, in both directions
//!
//! # Usage
//!
//! ```
//! use bicycle::BiCyclable;
//!
//! let characters = ["rick", "morty"];
//! let mut forever = characters.bi_cycle().unwrap();
//!
//! assert_eq!(forever.step(), &"morty");
//! assert_eq!(forever.step(), &"rick");
//!
//! forever.set_direction_reverse();
//!
//! assert_eq!(forever.step(), &"morty");
//! ```
//! For more information see [BiCycle].
mod bidirectional_cycle;
mod errors;

pub use bidirectional_cycle::{BiCyclable, BiCycle, Direction};
pub use errors::{Error, InvalidArgument};
