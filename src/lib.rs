#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Pattern Recipe
//!
//! > **Classic creational and structural patterns, written the Rust way.**
//!
//! Each module is a small, self-contained take on one pattern. None of them depend on
//! each other except through the shared [`model`] types. Everything is synchronous and
//! in-memory; the only output is the console report printed by the demo binary.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Data over class hierarchies
//! A furniture family is not a tree of nine product classes. It is a row in a
//! [`Catalog`](furniture_factory::Catalog) that maps `(Family, Category)` to a
//! constructor, and the [`FamilyFactory`](furniture_factory::FamilyFactory) resolves its
//! row once when it is built.
//!
//! ### Borrow, don't store
//! The [`Director`](car_builder::Director) holds no reference to a builder. Each recipe
//! borrows the builder mutably for the duration of the call, so there is never a question
//! of who owns the car under construction.
//!
//! ### Explicit single instances
//! [`Catalog::global`](furniture_factory::Catalog::global) is the only process-wide
//! value. It is built lazily through `OnceLock`, and anything that wants isolation can
//! build its own catalog instead.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Each module defines its own error type ([`FactoryError`](furniture_factory::FactoryError),
//! [`BuilderError`](car_builder::BuilderError)) with `thiserror`. Factory errors are
//! raised while binding a factory to a catalog, never while creating items.
//!
//! ### 2. Observability
//! We use `tracing` everywhere with structured fields. See the [`lifecycle::tracing`]
//! module for the subscriber setup and sample output.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. Abstract Factory ([`furniture_factory`], [`clients`])
//! - **Role**: Produce a matching chair, table and sofa from one family.
//! - **Key items**: [`FurnitureFactory`](furniture_factory::FurnitureFactory),
//!   [`FurnitureClient`](clients::FurnitureClient).
//!
//! ### 2. Builder ([`car_builder`])
//! - **Role**: Assemble a car feature by feature; replay named recipes.
//! - **Key items**: [`CarBuilder`](car_builder::CarBuilder),
//!   [`CarAssembler`](car_builder::CarAssembler), [`Recipe`](car_builder::Recipe).
//!
//! ### 3. Factory Method ([`logistics`])
//! - **Role**: Let each logistics kind pick its transporter.
//!
//! ### 4. Adapter ([`adapter`])
//! - **Role**: Make a square peg answer the question a round hole asks.
//!
//! ### 5. Plumbing ([`framework`], [`lifecycle`])
//! - **Role**: Console reports, test doubles, tracing setup.
//!
//! ## 🚀 Quick Start
//!
//! ### Running the Demo
//!
//! ```bash
//! # Run with info logs
//! RUST_LOG=info cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod adapter;
pub mod car_builder;
pub mod clients;
pub mod framework;
pub mod furniture_factory;
pub mod lifecycle;
pub mod logistics;
pub mod model;
