//! Model-View-Intent primitives shared by the widgets.
//!
//! Every widget keeps its selection state behind a reducer so that all
//! triggers (keys, clicks, timer ticks, host notifications) go through one
//! transition function:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Side effects (rendering, emitting change events, scheduling timers) are
//! performed by the owning component around the reducer call.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::WidgetState;
