//! Server-side API backend and business logic.
//!
//! Complete backend implementation for the training-management API: endpoint
//! handlers, business logic, data access, and infrastructure. The backend
//! uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token authentication and ownership guards
//!
//! # Request Flow
//!
//! A typical request flows through these layers:
//!
//! 1. **Router** receives the HTTP request and routes to the controller
//! 2. **Controller** authenticates via `AuthGuard`, checks ownership, converts DTOs
//! 3. **Service** executes business logic and lifecycle validation
//! 4. **Data** queries the database, converts entities to domain models
//! 5. **Controller** converts the domain model back to a DTO response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
