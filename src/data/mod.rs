//! Data layer: core types, parsing, loading, and export.
//!
//! Architecture:
//! ```text
//!  series (.data)        neighbourhoods (.dat)
//!        │                       │
//!        ▼                       ▼
//!   ┌──────────┐        ┌───────────────┐
//!   │  series   │        │ neighbourhood │  model + warnings
//!   └──────────┘        └───────────────┘
//!        │                       │
//!        └──────────┬────────────┘
//!                   ▼
//!             ┌──────────┐
//!             │  loader   │  open path, attach context
//!             └──────────┘
//!                   │
//!                   ▼
//!             ┌──────────┐
//!             │  export   │  JSON / CSV for the renderer
//!             └──────────┘
//! ```

pub mod error;
pub mod export;
pub mod loader;
pub mod model;
pub mod neighbourhood;
pub mod series;
