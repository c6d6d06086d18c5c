//! Prayer texts bundled as plain `.txt` files, one per service.
//!
//! ```no_run
//! use std::path::Path;
//! use sidduril_prayers::load_prayers;
//!
//! for prayer in load_prayers(Path::new("prayers")).unwrap() {
//!     println!("{}", prayer.name());
//! }
//! ```

pub mod error;
pub mod loader;
pub mod prayer;

pub use error::PrayerError;
pub use loader::load_prayers;
pub use prayer::{Prayer, SERVICE_ORDER, display_name, find_prayer};
