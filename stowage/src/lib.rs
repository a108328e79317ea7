//! A deterministic Container Packing Engine for 3D shipment planning.
//!
//! Given a container envelope and an incremental stream of item-placement
//! requests, `stowage` maintains a consistent packed state and answers
//! per-item fit queries. Placement is first-fit over a fixed grid scan,
//! trading optimality for reproducibility: the same container, the same
//! sequence of commits and the same item always yield the same position and
//! orientation.
//!
//! Sessions are plain owned values: every mutating operation takes
//! `&mut self`, so at most one in-flight mutation per session is guaranteed
//! by the borrow checker. Hosts sharing a session across threads must wrap
//! it in their own lock.

pub mod entities;
pub mod geometry;
pub mod manager;
pub mod placement;
pub mod util;
