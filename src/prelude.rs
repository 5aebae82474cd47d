pub use crate::container::prelude::*;
