//! Scene-script binders: the disposable layer between remote calls and
//! display state.
//!
//! # Overview
//! Each binder reacts to one lifecycle signal, issues its calls through the
//! `lens-core` facades, and writes extracted fields into owned `TextField`
//! display values. Failures never propagate past a binder: they become a
//! `tracing` diagnostic plus an explicit placeholder string, so display
//! fields are never left stale and nothing crashes the session.
//!
//! # Design
//! - `Session` owns the facades and binders and carries the weather report
//!   from the weather binder to the assistant as typed data — there is no
//!   ambient shared state.
//! - Within one binder, calls are strictly sequential (`get_place` only
//!   after `get_nearby_places` resolves non-empty); binders on different
//!   signals are independent.
//! - The location poller is the one component with a client-driven timer: a
//!   fixed re-arm delay after every poll, not a timeout.

pub mod assistant;
pub mod display;
pub mod location;
pub mod places;
pub mod session;
pub mod weather;

pub use assistant::AiAssistant;
pub use display::TextField;
pub use location::{GeoPosition, LocationError, LocationFields, LocationPoller, LocationService};
pub use places::PlacesLocation;
pub use session::{Session, SessionConfig};
pub use weather::WeatherDisplay;
