//! Rigid-body kinematics and narrow-phase collision for 2D platformers.
//!
//! `tria_physics` moves bodies under named forces, detects overlaps between
//! circles and axis-aligned rectangles, and pushes overlapping shapes apart
//! by inverse mass. Built for fixed-step game loops.
//!
//! # Features
//!
//! - **Named forces**: gravity, linear drag, ground normal, and custom entries per body
//! - **Impulses**: instantaneous velocity changes, spent on the next step
//! - **Two integrators**: semi-implicit Euler or position Verlet
//! - **Narrow phase**: circle/circle, circle/rect, rect/rect with depth and normal
//! - **Positional resolution**: repeated relaxation passes over every pair
//! - **Contact cache**: per-step record of who touched whom, for gameplay queries
//! - **Observable**: hook step phases via the `StepObserver` trait
//! - **`no_std` compatible**: needs only `alloc`
//!
//! # Example
//! ```
//! use tria_physics::{Collider, Mass, NoOpStepObserver, PhysicsConfig, Vec2, World};
//!
//! let config: PhysicsConfig<f32> = PhysicsConfig::new().with_gravity(Vec2::new(0.0, 1140.0));
//! let mut world = World::new();
//! let player = world
//!     .spawn_dynamic(Vec2::new(0.0, 0.0), Collider::circle(10.0).unwrap(), Mass::Finite(1.0), &config)
//!     .unwrap();
//! world.spawn_static(Vec2::new(0.0, 40.0), Collider::rect(100.0, 20.0).unwrap());
//!
//! world.step(1.0 / 60.0, &config, &mut NoOpStepObserver);
//! assert!(world.position(player).unwrap().y > 0.0);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod error;
pub mod config;
pub mod force;
pub mod body;
pub mod transform;
pub mod collider;
pub mod contact;
pub mod detector;
pub mod resolver;
pub mod integrator;
pub mod observer;
pub mod world;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec, Vec2};
pub use error::{PhysicsError, Result};
pub use config::{IntegrationMethod, PhysicsConfig};
pub use force::{ForceKind, ForceMap, ForceModel};
pub use body::{Body, Mass};
pub use transform::Transform;
pub use collider::{AxisAlignedRect, Circle, Collider, ShapeKind};
pub use contact::{Contact, ContactCache};
pub use detector::{detect, detect_all, Penetration, Placed};
pub use resolver::{CollidableSet, Member, RelaxationReport, Resolver};
pub use integrator::Integrator;
pub use observer::{NoOpStepObserver, StepObserver};
pub use world::{EntityId, World};
